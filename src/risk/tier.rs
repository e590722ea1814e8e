//! Risk tiers and the progress input of the classifier.

use crate::project::domain::ProjectState;
use crate::task::domain::TaskStatus;
use serde::Serialize;
use std::fmt;

/// Deadline risk of a task or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Due more than three days out, or already finished.
    OnTime,
    /// Due within three days.
    Near,
    /// Past due and not finished.
    Late,
    /// No due date recorded.
    Unknown,
}

impl RiskTier {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "on_time",
            Self::Near => "near",
            Self::Late => "late",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the classified item still carries forward risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Work remains.
    Open,
    /// Work is finished; the item is always on time.
    Settled,
}

impl From<TaskStatus> for Progress {
    fn from(status: TaskStatus) -> Self {
        if status.is_done() {
            Self::Settled
        } else {
            Self::Open
        }
    }
}

impl From<ProjectState> for Progress {
    fn from(state: ProjectState) -> Self {
        match state {
            ProjectState::Active => Self::Open,
            ProjectState::Archived => Self::Settled,
        }
    }
}
