//! Port for storing live sessions between requests.

use crate::identity::domain::{Session, SessionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Session storage contract.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores or replaces a session.
    async fn save(&self, session: &Session) -> SessionStoreResult<()>;

    /// Finds a live session.
    ///
    /// Returns `None` when the session is unknown or has ended.
    async fn find(&self, id: SessionId) -> SessionStoreResult<Option<Session>>;

    /// Removes a session, returning whether it existed.
    async fn remove(&self, id: SessionId) -> SessionStoreResult<bool>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Storage-layer failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
