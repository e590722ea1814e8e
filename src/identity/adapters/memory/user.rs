//! In-memory user directory for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{Credential, EmailAddress, PersistedUserData, User, UserDraft, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

fn lock_error(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions a user, assigning the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when the address is
    /// already registered.
    pub fn provision(&self, draft: UserDraft) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.users.values().any(|user| *user.email() == draft.email) {
            return Err(UserRepositoryError::DuplicateEmail(draft.email));
        }

        state.last_id += 1;
        let user = User::from_persisted(PersistedUserData {
            id: UserId::new(state.last_id),
            name: draft.name,
            role: draft.role,
            email: draft.email,
            credential: draft.credential,
        });
        state.users.insert(user.id(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn update_credential(
        &self,
        id: UserId,
        credential: &Credential,
    ) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let user = state
            .users
            .get_mut(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        user.replace_credential(credential.clone());
        Ok(())
    }
}
