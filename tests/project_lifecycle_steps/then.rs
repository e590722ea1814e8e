//! Then steps for project lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use atelier::lifecycle::ErrorKind;
use atelier::project::domain::ProjectState;
use rstest_bdd_macros::then;

#[then(r#"the task risk is "{tier}""#)]
fn task_risk_is(world: &LifecycleWorld, tier: String) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let actual = world.coordinator()?.risk().classify_task(task);
    eyre::ensure!(actual.as_str() == tier, "expected risk {tier}, found {actual}");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &LifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the project is archived")]
fn project_is_archived(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let project = world
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    eyre::ensure!(
        project.state() == ProjectState::Archived,
        "expected archived project, last error: {:?}",
        world.last_error
    );
    Ok(())
}

#[then(r#"the action fails with a "{kind}" error"#)]
fn action_fails_with(world: &LifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    expect_failure(world, &kind)
}

#[then(r#"the action fails with an "{kind}" error"#)]
fn action_fails_with_an(world: &LifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    expect_failure(world, &kind)
}

fn expect_failure(world: &LifecycleWorld, kind: &str) -> Result<(), eyre::Report> {
    let expected = match kind {
        "validation" => ErrorKind::Validation,
        "authorization" => ErrorKind::Authorization,
        "not found" => ErrorKind::NotFound,
        other => return Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    };
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the action to fail"))?;
    eyre::ensure!(err.kind() == expected, "expected {kind} error, got {err:?}");
    Ok(())
}

#[then(r#"the freelancer was notified about "{title}""#)]
fn freelancer_was_notified(world: &mut LifecycleWorld, title: String) -> Result<(), eyre::Report> {
    world.shutdown();
    let subject = format!("New task assigned: {title}");
    eyre::ensure!(
        world
            .delivered
            .iter()
            .any(|message| message.recipient.as_str() == "leo@studio.pe" && message.subject == subject),
        "no assignment notification for {title}"
    );
    Ok(())
}
