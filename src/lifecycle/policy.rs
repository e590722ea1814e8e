//! Operator policy choices applied by the coordinator.

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Who may change a task's status once the role check has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOwnershipPolicy {
    /// Freelancers may only move tasks assigned to them.
    #[default]
    AssigneeOnly,
    /// Any role holding `edit_task_status` may move any task.
    Unrestricted,
}

/// Whether archiving waits for late open tasks to be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveGuard {
    /// Archiving always proceeds.
    #[default]
    Permissive,
    /// Archiving is refused while any open task is late.
    RejectLateOpenTasks,
}

/// Error returned while parsing a policy value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown policy value: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for TaskOwnershipPolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "assignee_only" => Ok(Self::AssigneeOnly),
            "unrestricted" => Ok(Self::Unrestricted),
            _ => Err(ParsePolicyError(value.to_owned())),
        }
    }
}

impl FromStr for ArchiveGuard {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "reject_late_open_tasks" => Ok(Self::RejectLateOpenTasks),
            _ => Err(ParsePolicyError(value.to_owned())),
        }
    }
}

/// Policy bundle handed to the coordinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecyclePolicy {
    /// Task ownership rule.
    pub task_ownership: TaskOwnershipPolicy,
    /// Archive guard rule.
    pub archive_guard: ArchiveGuard,
}

impl From<crate::config::PolicySettings> for LifecyclePolicy {
    fn from(settings: crate::config::PolicySettings) -> Self {
        Self {
            task_ownership: settings.task_ownership,
            archive_guard: settings.archive_guard,
        }
    }
}
