//! Reporting errors.

use crate::access::AccessDenied;
use crate::lifecycle::ErrorKind;
use crate::project::ports::ProjectRepositoryError;
use crate::task::ports::TaskRepositoryError;
use thiserror::Error;

/// Errors returned by [`super::ReportingService`].
#[derive(Debug, Error)]
pub enum ReportingError {
    /// The actor's role cannot view reports.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// Project store failure.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),

    /// Task store failure.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

impl ReportingError {
    /// Returns the caller-facing class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Denied(_) => ErrorKind::Authorization,
            Self::Projects(ProjectRepositoryError::NotFound(_))
            | Self::Tasks(TaskRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Projects(_) | Self::Tasks(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type for reporting operations.
pub type ReportingResult<T> = Result<T, ReportingError>;
