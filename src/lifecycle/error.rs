//! Caller-facing error taxonomy and coordinator errors.

use crate::access::AccessDenied;
use crate::identity::domain::UserId;
use crate::identity::ports::UserRepositoryError;
use crate::project::domain::{ProjectDomainError, ProjectId};
use crate::project::ports::ProjectRepositoryError;
use crate::resource::domain::{ResourceDomainError, ResourceId};
use crate::resource::ports::ResourceRepositoryError;
use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::ports::TaskRepositoryError;
use thiserror::Error;

/// Class of failure as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credential mismatch or unknown identity.
    Authentication,
    /// The role lacks the capability, or the actor does not own the task.
    Authorization,
    /// Input is missing or refers to something unusable.
    Validation,
    /// The addressed entity does not exist.
    NotFound,
    /// The store rejected or could not run the operation.
    Persistence,
}

impl ErrorKind {
    /// Returns whether the caller may correct the request and retry.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::Persistence)
    }

    /// Returns the generic message surfaced at the caller boundary.
    #[must_use]
    pub const fn caller_message(self) -> &'static str {
        match self {
            Self::Authentication => "invalid credentials",
            Self::Authorization => "action not permitted",
            Self::Validation => "the request is invalid",
            Self::NotFound => "not found",
            Self::Persistence => "the operation failed",
        }
    }
}

/// Errors returned by the lifecycle coordinator.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The capability gate refused the action.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// The actor may only change the status of tasks assigned to them.
    #[error("user {actor} is not the assignee of task {task_id}")]
    NotAssignee {
        /// Acting user.
        actor: UserId,
        /// Task the actor tried to change.
        task_id: TaskId,
    },

    /// A referenced user is missing or has the wrong role.
    #[error("invalid {field}: {reason}")]
    InvalidReference {
        /// Field holding the reference.
        field: &'static str,
        /// Why the reference was refused.
        reason: &'static str,
    },

    /// Tasks can only be added to active projects.
    #[error("project {0} is archived")]
    ProjectArchived(ProjectId),

    /// Archiving was refused because late tasks are still open.
    #[error("project {project_id} has {late_tasks} late open task(s)")]
    LateTasksOpen {
        /// Project that was to be archived.
        project_id: ProjectId,
        /// Number of open tasks past their due date.
        late_tasks: usize,
    },

    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The resource does not exist.
    #[error("resource not found: {0}")]
    ResourceNotFound(ResourceId),

    /// Project validation failed.
    #[error(transparent)]
    Project(#[from] ProjectDomainError),

    /// Task validation or transition failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),

    /// Resource validation failed.
    #[error(transparent)]
    Resource(#[from] ResourceDomainError),

    /// Project repository failure.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    /// Task repository failure.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),

    /// User repository failure.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),

    /// Resource repository failure.
    #[error(transparent)]
    ResourceRepository(#[from] ResourceRepositoryError),
}

impl LifecycleError {
    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Denied(_) | Self::NotAssignee { .. } => ErrorKind::Authorization,
            Self::InvalidReference { .. }
            | Self::ProjectArchived(_)
            | Self::LateTasksOpen { .. }
            | Self::Project(_)
            | Self::Task(_)
            | Self::Resource(_) => ErrorKind::Validation,
            Self::ProjectNotFound(_)
            | Self::TaskNotFound(_)
            | Self::ResourceNotFound(_)
            | Self::ProjectRepository(ProjectRepositoryError::NotFound(_))
            | Self::TaskRepository(TaskRepositoryError::NotFound(_))
            | Self::UserRepository(UserRepositoryError::NotFound(_))
            | Self::ResourceRepository(ResourceRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::ProjectRepository(_)
            | Self::TaskRepository(_)
            | Self::UserRepository(_)
            | Self::ResourceRepository(_) => ErrorKind::Persistence,
        }
    }

    /// Returns the generic message surfaced at the caller boundary.
    #[must_use]
    pub const fn caller_message(&self) -> &'static str {
        self.kind().caller_message()
    }
}

/// Result type for lifecycle operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
