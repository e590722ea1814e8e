//! Task status values and their forward-only ordering.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To-Do")]
    Todo,
    /// Work is under way.
    Doing,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "To-Do",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Returns the status that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::Doing),
            Self::Doing => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns whether moving to `target` is a single forward step.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Todo, Self::Doing) | (Self::Doing, Self::Done)
        )
    }

    /// Returns whether the status is terminal.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "to-do" | "todo" | "pendiente" => Ok(Self::Todo),
            "doing" | "en progreso" => Ok(Self::Doing),
            "done" | "completado" | "terminado" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
