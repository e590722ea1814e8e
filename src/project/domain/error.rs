//! Error types for project domain validation and parsing.

use super::ProjectId;
use thiserror::Error;

/// Errors returned while constructing or transitioning projects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// A required field is blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The budget is below zero.
    #[error("budget must not be negative, got {0}")]
    NegativeBudget(i64),

    /// The project has already been archived.
    #[error("project {0} is already archived")]
    AlreadyArchived(ProjectId),
}

/// Error returned while parsing project states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project state: {0}")]
pub struct ParseProjectStateError(pub String);
