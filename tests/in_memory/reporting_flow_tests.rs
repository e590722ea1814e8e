//! Dashboard and report figures after lifecycle actions.

use super::helpers::{Studio, studio};
use atelier::identity::domain::{Actor, User};
use atelier::lifecycle::ErrorKind;
use atelier::project::domain::{Budget, ProjectDetails};
use atelier::risk::RiskTier;
use atelier::task::domain::TaskDraft;
use chrono::Duration;
use eyre::ensure;
use rstest::rstest;

fn actor(user: &User) -> Actor {
    Actor::new(user.id(), user.name(), user.role())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn figures_follow_lifecycle_actions(studio: eyre::Result<Studio>) -> eyre::Result<()> {
    let studio = studio?;
    let manager = actor(&studio.manager);
    let internal = actor(&studio.internal);

    let nightfall = studio
        .coordinator
        .create_project(
            &manager,
            ProjectDetails::new("Nightfall", studio.manager.id())?.with_budget(Budget::new(12_000)?),
        )
        .await?;
    let dawn = studio
        .coordinator
        .create_project(
            &manager,
            ProjectDetails::new("Dawn", studio.manager.id())?.with_budget(Budget::new(8_000)?),
        )
        .await?;

    let due = Some(studio.today + Duration::days(1));
    let first = studio
        .coordinator
        .create_task(
            &internal,
            TaskDraft::new("Level 1", studio.freelancer.id(), nightfall.id(), due)?,
        )
        .await?;
    studio
        .coordinator
        .create_task(
            &internal,
            TaskDraft::new("Level 2", studio.freelancer.id(), nightfall.id(), None)?,
        )
        .await?;
    studio.coordinator.advance_task(&internal, first.id()).await?;
    studio.coordinator.advance_task(&internal, first.id()).await?;
    studio.coordinator.archive_project(&manager, dawn.id()).await?;

    let dashboard = studio.reports.dashboard(&actor(&studio.freelancer)).await?;
    ensure!(dashboard.active_projects == 1);
    ensure!(dashboard.pending_tasks == 1);
    ensure!(dashboard.on_time_percent == 50);

    let kpis = studio.reports.kpis(&internal).await?;
    ensure!(kpis.total_budget == 12_000);
    ensure!(kpis.progress.len() == 1);
    ensure!(kpis.progress.first().map(|entry| entry.percent) == Some(50));

    let unknown = studio.reports.tasks_by_risk(Some(RiskTier::Unknown)).await?;
    ensure!(unknown.len() == 1);
    let on_time = studio.reports.tasks_by_risk(Some(RiskTier::OnTime)).await?;
    ensure!(on_time.first().map(|assessed| assessed.task.id()) == Some(first.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_page_is_closed_to_freelancers(studio: eyre::Result<Studio>) -> eyre::Result<()> {
    let studio = studio?;
    let result = studio.reports.kpis(&actor(&studio.freelancer)).await;
    ensure!(matches!(result, Err(ref err) if err.kind() == ErrorKind::Authorization));
    Ok(())
}
