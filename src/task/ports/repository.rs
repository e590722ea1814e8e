//! Repository port for task persistence.

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each method is a single atomic write or read; concurrent writers to the
/// same task resolve by last write wins.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task in the `To-Do` status and returns it with its
    /// assigned identifier.
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task ordered by identifier.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one project ordered by identifier.
    async fn list_for_project(&self, project: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
