//! In-memory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{Session, SessionId},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &Session) -> SessionStoreResult<()> {
        let mut sessions = self.sessions.write().map_err(lock_error)?;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn find(&self, id: SessionId) -> SessionStoreResult<Option<Session>> {
        let sessions = self.sessions.read().map_err(lock_error)?;
        Ok(sessions.get(&id).cloned())
    }

    async fn remove(&self, id: SessionId) -> SessionStoreResult<bool> {
        let mut sessions = self.sessions.write().map_err(lock_error)?;
        Ok(sessions.remove(&id).is_some())
    }
}
