//! Given steps for project lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use atelier::access::Role;
use atelier::project::domain::ProjectDetails;
use atelier::task::domain::TaskDraft;
use chrono::{Duration, NaiveDate};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a studio with a manager and a freelancer")]
fn studio_is_open(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    world.open_studio()
}

#[given(r#"the manager creates project "{name}" due in {days:u32} days"#)]
fn manager_creates_project(
    world: &mut LifecycleWorld,
    name: String,
    days: u32,
) -> Result<(), eyre::Report> {
    let manager = world.actor(Role::Manager)?;
    let due = world.today()? + Duration::days(i64::from(days));
    let details = ProjectDetails::new(name, manager.user_id())?.with_due_date(due);
    let project = run_async(world.coordinator()?.create_project(&manager, details))
        .wrap_err("create project in scenario setup")?;
    world.project = Some(project);
    Ok(())
}

fn assign_task(
    world: &mut LifecycleWorld,
    title: String,
    due: NaiveDate,
) -> Result<(), eyre::Report> {
    let manager = world.actor(Role::Manager)?;
    let assignee = world.actor(Role::Freelancer)?;
    let project = world
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let draft = TaskDraft::new(title, assignee.user_id(), project.id(), Some(due))?;
    let task = run_async(world.coordinator()?.create_task(&manager, draft))
        .wrap_err("create task in scenario setup")?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the manager assigns task "{title}" to the freelancer due in {days:u32} days"#)]
fn manager_assigns_task(
    world: &mut LifecycleWorld,
    title: String,
    days: u32,
) -> Result<(), eyre::Report> {
    let due = world.today()? + Duration::days(i64::from(days));
    assign_task(world, title, due)
}

#[given(r#"the manager assigns task "{title}" to the freelancer overdue by {days:u32} days"#)]
fn manager_assigns_overdue_task(
    world: &mut LifecycleWorld,
    title: String,
    days: u32,
) -> Result<(), eyre::Report> {
    let due = world.today()? - Duration::days(i64::from(days));
    assign_task(world, title, due)
}
