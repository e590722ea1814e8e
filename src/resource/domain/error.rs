//! Error types for resource validation and parsing.

use thiserror::Error;

/// Errors returned while constructing resources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceDomainError {
    /// A required field is blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

/// Error returned while parsing resource categories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown resource category: {0}")]
pub struct ParseResourceCategoryError(pub String);
