//! When steps for project lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use atelier::access::Role;
use atelier::project::domain::ProjectDetails;
use atelier::task::domain::TaskStatus;
use rstest_bdd_macros::when;

fn current_task_id(world: &LifecycleWorld) -> eyre::Result<atelier::task::domain::TaskId> {
    world
        .task
        .as_ref()
        .map(atelier::task::domain::Task::id)
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
}

#[when("the freelancer advances the task")]
fn freelancer_advances_task(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let actor = world.actor(Role::Freelancer)?;
    let id = current_task_id(world)?;
    let result = run_async(world.coordinator()?.advance_task(&actor, id));
    if let Some(task) = world.record(result) {
        world.task = Some(task);
    }
    Ok(())
}

#[when(r#"the freelancer moves the task to "{status}""#)]
fn freelancer_moves_task(world: &mut LifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let actor = world.actor(Role::Freelancer)?;
    let id = current_task_id(world)?;
    let result = run_async(world.coordinator()?.transition_task(&actor, id, target));
    if let Some(task) = world.record(result) {
        world.task = Some(task);
    }
    Ok(())
}

#[when("the manager archives the project")]
fn manager_archives_project(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let actor = world.actor(Role::Manager)?;
    let id = world
        .project
        .as_ref()
        .map(atelier::project::domain::Project::id)
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let result = run_async(world.coordinator()?.archive_project(&actor, id));
    if let Some(project) = world.record(result) {
        world.project = Some(project);
    }
    Ok(())
}

#[when(r#"the freelancer creates project "{name}""#)]
fn freelancer_creates_project(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let actor = world.actor(Role::Freelancer)?;
    let manager = world.actor(Role::Manager)?;
    let details = ProjectDetails::new(name, manager.user_id())?;
    let result = run_async(world.coordinator()?.create_project(&actor, details));
    if let Some(project) = world.record(result) {
        world.project = Some(project);
    }
    Ok(())
}
