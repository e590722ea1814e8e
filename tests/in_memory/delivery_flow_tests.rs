//! Project and task delivery from creation to archive.

use super::helpers::{Studio, studio};
use atelier::identity::domain::{Actor, User};
use atelier::lifecycle::LifecyclePolicy;
use atelier::notification::adapters::memory::RecordingTransport;
use atelier::project::domain::{ProjectDetails, ProjectState};
use atelier::risk::RiskTier;
use atelier::task::domain::{TaskDraft, TaskStatus};
use chrono::Duration;
use eyre::ensure;
use rstest::rstest;

fn actor(user: &User) -> Actor {
    Actor::new(user.id(), user.name(), user.role())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_delivery_clears_risk_and_project_archives(
    studio: eyre::Result<Studio>,
) -> eyre::Result<()> {
    let studio = studio?;
    let manager = actor(&studio.manager);
    let freelancer = actor(&studio.freelancer);

    let project = studio
        .coordinator
        .create_project(
            &manager,
            ProjectDetails::new("Nightfall", studio.manager.id())?
                .with_due_date(studio.today + Duration::days(10)),
        )
        .await?;
    ensure!(studio.coordinator.risk().classify_project(&project) == RiskTier::OnTime);

    let task = studio
        .coordinator
        .create_task(
            &manager,
            TaskDraft::new(
                "Boss fight",
                studio.freelancer.id(),
                project.id(),
                Some(studio.today + Duration::days(2)),
            )?,
        )
        .await?;
    ensure!(studio.coordinator.risk().classify_task(&task) == RiskTier::Near);

    let doing = studio.coordinator.advance_task(&freelancer, task.id()).await?;
    ensure!(doing.status() == TaskStatus::Doing);
    let done = studio.coordinator.advance_task(&freelancer, task.id()).await?;
    ensure!(done.status() == TaskStatus::Done);
    ensure!(studio.coordinator.risk().classify_task(&done) == RiskTier::OnTime);

    let archived = studio
        .coordinator
        .archive_project(&manager, project.id())
        .await?;
    ensure!(archived.state() == ProjectState::Archived);

    let delivered = studio.shutdown().await;
    let recipients: Vec<&str> = delivered
        .iter()
        .map(|message| message.recipient.as_str())
        .collect();
    ensure!(recipients.contains(&"lucia@studio.pe"));
    ensure!(recipients.contains(&"leo@studio.pe"));
    ensure!(delivered.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn late_work_does_not_block_archive_by_default(
    studio: eyre::Result<Studio>,
) -> eyre::Result<()> {
    let studio = studio?;
    let manager = actor(&studio.manager);
    let project = studio
        .coordinator
        .create_project(&manager, ProjectDetails::new("Nightfall", studio.manager.id())?)
        .await?;
    let task = studio
        .coordinator
        .create_task(
            &manager,
            TaskDraft::new(
                "Overdue polish",
                studio.freelancer.id(),
                project.id(),
                Some(studio.today - Duration::days(3)),
            )?,
        )
        .await?;
    ensure!(studio.coordinator.risk().classify_task(&task) == RiskTier::Late);

    let archived = studio
        .coordinator
        .archive_project(&manager, project.id())
        .await?;
    ensure!(!archived.is_active());

    let detail = studio
        .coordinator
        .project_detail(&actor(&studio.freelancer), project.id())
        .await?;
    ensure!(detail.risk == RiskTier::OnTime);
    ensure!(detail.tasks.first().map(|assessed| assessed.risk) == Some(RiskTier::Late));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_outage_leaves_committed_state_intact() -> eyre::Result<()> {
    let studio = Studio::build(LifecyclePolicy::default(), RecordingTransport::offline())?;
    let manager = actor(&studio.manager);

    let project = studio
        .coordinator
        .create_project(&manager, ProjectDetails::new("Nightfall", studio.manager.id())?)
        .await?;
    let task = studio
        .coordinator
        .create_task(
            &manager,
            TaskDraft::new("Boss fight", studio.freelancer.id(), project.id(), None)?,
        )
        .await?;

    let stored = studio.coordinator.tasks_for_project(project.id()).await?;
    ensure!(stored == vec![task]);
    ensure!(studio.coordinator.find_project(project.id()).await?.is_active());
    ensure!(studio.shutdown().await.is_empty());
    Ok(())
}
