//! Task entity and creation input.

use super::{TaskDomainError, TaskId, TaskStatus};
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::NaiveDate;
use serde::Serialize;

/// Validated input for a new task.
///
/// The store assigns the identifier; every new task starts as
/// [`TaskStatus::Todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Short description of the work.
    pub title: String,
    /// User expected to do the work.
    pub assignee: UserId,
    /// Parent project.
    pub project: ProjectId,
    /// Calendar due date, if one was set.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Validates and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        assignee: UserId,
        project: ProjectId,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(TaskDomainError::MissingField { field: "title" });
        }
        Ok(Self {
            title,
            assignee,
            project,
            due_date,
        })
    }
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Assigned user.
    pub assignee: UserId,
    /// Parent project.
    pub project: ProjectId,
    /// Calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Current status.
    pub status: TaskStatus,
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    assignee: UserId,
    project: ProjectId,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            assignee: data.assignee,
            project: data.project,
            due_date: data.due_date,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn assignee(&self) -> UserId {
        self.assignee
    }

    /// Returns the parent project.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Moves the task to its next status and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyDone`] when the task is done.
    pub fn advance(&mut self) -> Result<TaskStatus, TaskDomainError> {
        let next = self
            .status
            .next()
            .ok_or(TaskDomainError::AlreadyDone(self.id))?;
        self.status = next;
        Ok(next)
    }

    /// Moves the task to `target` when it is the next status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] for skips,
    /// regressions and no-op transitions.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
