//! Report figures.

use crate::project::domain::ProjectId;
use crate::task::domain::TaskStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rounded share of `part` in `whole` as a whole percentage.
///
/// Halves round up. An empty `whole` yields zero.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u8 {
    part.saturating_mul(200)
        .saturating_add(whole)
        .checked_div(whole.saturating_mul(2))
        .and_then(|value| u8::try_from(value).ok())
        .unwrap_or(0)
}

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Tasks not yet started.
    pub todo: usize,
    /// Tasks in progress.
    pub doing: usize,
    /// Finished tasks.
    pub done: usize,
}

impl StatusCounts {
    /// Counts `statuses`.
    #[must_use]
    pub fn tally(statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            let slot = match status {
                TaskStatus::Todo => &mut counts.todo,
                TaskStatus::Doing => &mut counts.doing,
                TaskStatus::Done => &mut counts.done,
            };
            *slot = slot.saturating_add(1);
            counts
        })
    }

    /// Total number of counted tasks.
    #[must_use]
    pub const fn total(self) -> usize {
        self.todo.saturating_add(self.doing).saturating_add(self.done)
    }

    /// Tasks that are not finished.
    #[must_use]
    pub const fn pending(self) -> usize {
        self.todo.saturating_add(self.doing)
    }

    /// Finished share of all counted tasks.
    #[must_use]
    pub fn done_percent(self) -> u8 {
        percentage(self.done, self.total())
    }
}

/// Status counts of one active project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatusSummary {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Task counts by status.
    pub counts: StatusCounts,
}

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Number of active projects.
    pub active_projects: usize,
    /// Unfinished tasks belonging to active projects.
    pub pending_tasks: usize,
    /// Finished share of every task.
    pub on_time_percent: u8,
    /// Per-project status counts, one entry per active project.
    pub projects: Vec<ProjectStatusSummary>,
}

/// Completion of one active project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Finished share of the project's tasks.
    pub percent: u8,
}

/// Key figures of the report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    /// Number of active projects.
    pub active_projects: usize,
    /// Sum of the budgets of active projects.
    pub total_budget: i64,
    /// Finished share of every task.
    pub on_time_percent: u8,
    /// Progress of each active project.
    pub progress: Vec<ProjectProgress>,
    /// When the figures were computed.
    pub generated_at: DateTime<Utc>,
}
