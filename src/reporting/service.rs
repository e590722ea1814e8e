//! Read-only reporting service.

use super::{
    Dashboard, Kpis, ProjectProgress, ProjectStatusSummary, ReportingError, ReportingResult,
    StatusCounts,
};
use crate::access::{Action, require};
use crate::identity::domain::Actor;
use crate::lifecycle::{AssessedTask, ErrorKind};
use crate::project::{
    domain::{Project, ProjectState},
    ports::ProjectRepository,
};
use crate::risk::{RiskClassifier, RiskTier};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error};

/// Computes dashboard and report figures from the stores.
pub struct ReportingService<C>
where
    C: Clock + Send + Sync,
{
    projects: Arc<dyn ProjectRepository>,
    tasks: Arc<dyn TaskRepository>,
    risk: RiskClassifier<C>,
}

impl<C> Clone for ReportingService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
            risk: self.risk.clone(),
        }
    }
}

fn logged(operation: &'static str) -> impl FnOnce(ReportingError) -> ReportingError {
    move |err| {
        if err.kind() == ErrorKind::Persistence {
            error!(operation, error = %err, "report query failed");
        }
        err
    }
}

impl<C> ReportingService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a reporting service over the given stores.
    #[must_use]
    pub const fn new(
        projects: Arc<dyn ProjectRepository>,
        tasks: Arc<dyn TaskRepository>,
        risk: RiskClassifier<C>,
    ) -> Self {
        Self {
            projects,
            tasks,
            risk,
        }
    }

    /// Computes the dashboard figures. Every role may view the dashboard.
    ///
    /// # Errors
    ///
    /// Returns a store error when projects or tasks cannot be read.
    pub async fn dashboard(&self, actor: &Actor) -> ReportingResult<Dashboard> {
        let (active, tasks) = self.snapshot().await.map_err(logged("dashboard"))?;
        let projects: Vec<ProjectStatusSummary> = active
            .iter()
            .map(|project| ProjectStatusSummary {
                project_id: project.id(),
                name: project.name().to_owned(),
                counts: counts_for(project, &tasks),
            })
            .collect();
        let pending_tasks = projects
            .iter()
            .map(|summary| summary.counts.pending())
            .fold(0, usize::saturating_add);

        debug!(actor = %actor.user_id(), "dashboard computed");
        Ok(Dashboard {
            active_projects: active.len(),
            pending_tasks,
            on_time_percent: overall(&tasks).done_percent(),
            projects,
        })
    }

    /// Computes the report key figures.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::Denied`] without `view_reports`, or a store
    /// error when projects or tasks cannot be read.
    pub async fn kpis(&self, actor: &Actor) -> ReportingResult<Kpis> {
        require(actor.role(), Action::ViewReports)?;
        let (active, tasks) = self.snapshot().await.map_err(logged("kpis"))?;
        let total_budget = active
            .iter()
            .map(|project| project.details().budget().amount())
            .fold(0, i64::saturating_add);
        let progress = active
            .iter()
            .map(|project| ProjectProgress {
                project_id: project.id(),
                name: project.name().to_owned(),
                percent: counts_for(project, &tasks).done_percent(),
            })
            .collect();

        debug!(actor = %actor.user_id(), "report figures computed");
        Ok(Kpis {
            active_projects: active.len(),
            total_budget,
            on_time_percent: overall(&tasks).done_percent(),
            progress,
            generated_at: self.risk.now(),
        })
    }

    /// Lists every task with its risk tier, optionally keeping one tier.
    ///
    /// # Errors
    ///
    /// Returns a store error when tasks cannot be read.
    pub async fn tasks_by_risk(
        &self,
        filter: Option<RiskTier>,
    ) -> ReportingResult<Vec<AssessedTask>> {
        let tasks = self
            .tasks
            .list()
            .await
            .map_err(ReportingError::from)
            .map_err(logged("tasks_by_risk"))?;
        Ok(tasks
            .into_iter()
            .map(|task| AssessedTask {
                risk: self.risk.classify_task(&task),
                task,
            })
            .filter(|assessed| filter.is_none_or(|tier| assessed.risk == tier))
            .collect())
    }

    async fn snapshot(&self) -> ReportingResult<(Vec<Project>, Vec<Task>)> {
        let active = self.projects.list_by_state(ProjectState::Active).await?;
        let tasks = self.tasks.list().await?;
        Ok((active, tasks))
    }
}

fn counts_for(project: &Project, tasks: &[Task]) -> StatusCounts {
    StatusCounts::tally(
        tasks
            .iter()
            .filter(|task| task.project() == project.id())
            .map(Task::status),
    )
}

fn overall(tasks: &[Task]) -> StatusCounts {
    StatusCounts::tally(tasks.iter().map(Task::status))
}
