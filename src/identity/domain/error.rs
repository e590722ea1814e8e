//! Error types for identity domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// A new credential hash could not be produced.
    #[error("credential hashing failed: {0}")]
    Hashing(String),
}

/// Error returned while parsing a theme preference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);
