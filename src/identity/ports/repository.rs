//! Repository port for user lookup and credential migration.

use crate::identity::domain::{Credential, EmailAddress, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User directory contract.
///
/// Users are provisioned outside this crate; the only write the core
/// performs is replacing a credential record during migration.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by contact address.
    ///
    /// Returns `None` when no user has the address.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Returns every user ordered by identifier.
    async fn list(&self) -> UserRepositoryResult<Vec<User>>;

    /// Replaces the stored credential record of a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist.
    async fn update_credential(
        &self,
        id: UserId,
        credential: &Credential,
    ) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// A user with the same contact address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
