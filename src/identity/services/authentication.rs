//! Login, logout and session-scoped preferences.

use crate::access::{AccessDenied, Action, Role, require};
use crate::identity::{
    domain::{AuthenticatedUser, Credential, EmailAddress, Session, SessionId, Theme, User},
    adapters::hashing::BcryptVerifier,
    ports::{
        CredentialVerifier, SessionStore, SessionStoreError, UserRepository, UserRepositoryError,
    },
};
use crate::lifecycle::ErrorKind;
use crate::notification::{domain::LifecycleEvent, services::NotificationDispatcher};
use mockable::Clock;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{info, warn};

/// Message returned by [`AuthenticationService::recover_access`] whether or
/// not the address is known.
pub const RECOVERY_ACKNOWLEDGEMENT: &str =
    "If the address is registered, recovery instructions have been sent.";

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Unknown address or wrong secret; the two are not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The session is unknown or has ended.
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    /// The capability gate refused the action.
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    /// User repository failure.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),

    /// Session store failure.
    #[error(transparent)]
    Sessions(#[from] SessionStoreError),
}

impl AuthenticationError {
    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::SessionNotFound(_) => ErrorKind::Authentication,
            Self::Denied(_) => ErrorKind::Authorization,
            Self::Users(UserRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Users(_) | Self::Sessions(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type for authentication operations.
pub type AuthenticationResult<T> = Result<T, AuthenticationError>;

/// Secret hashed into the decoy record checked for unknown addresses.
const DECOY_SECRET: &str = "atelier-decoy-credential";

/// Authentication and session service.
#[derive(Clone)]
pub struct AuthenticationService<U, S, C>
where
    U: UserRepository,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    sessions: Arc<S>,
    clock: Arc<C>,
    notifier: NotificationDispatcher,
    verifier: Arc<dyn CredentialVerifier>,
    decoy: Arc<OnceLock<Credential>>,
    hash_cost: u32,
    rehash_cost: Option<u32>,
}

impl<U, S, C> AuthenticationService<U, S, C>
where
    U: UserRepository,
    S: SessionStore,
    C: Clock + Send + Sync,
{
    /// Creates a service that leaves legacy credentials untouched.
    #[must_use]
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        clock: Arc<C>,
        notifier: NotificationDispatcher,
    ) -> Self {
        Self {
            users,
            sessions,
            clock,
            notifier,
            verifier: Arc::new(BcryptVerifier),
            decoy: Arc::new(OnceLock::new()),
            hash_cost: bcrypt::DEFAULT_COST,
            rehash_cost: None,
        }
    }

    /// Replaces the credential verifier.
    #[must_use]
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Sets the bcrypt cost of the decoy record checked for unknown
    /// addresses. It should match the cost of the stored hashes.
    #[must_use]
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self.decoy = Arc::new(OnceLock::new());
        self
    }

    /// Rewrites matching legacy credentials as bcrypt records at login.
    #[must_use]
    pub const fn with_legacy_rehash(mut self, cost: u32) -> Self {
        self.rehash_cost = Some(cost);
        self
    }

    /// Checks `secret` on the blocking pool.
    ///
    /// Without a stored credential the secret is checked against a decoy
    /// hash so unknown addresses cost the same work as known ones.
    async fn check_secret(&self, credential: Option<Credential>, secret: &str) -> bool {
        let verifier = Arc::clone(&self.verifier);
        let decoy = Arc::clone(&self.decoy);
        let cost = self.hash_cost;
        let supplied = secret.to_owned();
        tokio::task::spawn_blocking(move || {
            let record = credential
                .unwrap_or_else(|| decoy.get_or_init(|| decoy_record(cost)).clone());
            verifier.verify(&record, &supplied)
        })
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "credential check did not complete");
            false
        })
    }

    /// Verifies a login attempt and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::InvalidCredentials`] for a malformed
    /// or unknown address and for a wrong secret alike, or a storage error.
    pub async fn login(&self, email: &str, secret: &str) -> AuthenticationResult<Session> {
        let Ok(address) = EmailAddress::new(email) else {
            self.check_secret(None, secret).await;
            warn!(reason = "malformed address", "login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        };
        let Some(user) = self.users.find_by_email(&address).await? else {
            self.check_secret(None, secret).await;
            warn!(email = %address, reason = "unknown address", "login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        };
        if !self.check_secret(Some(user.credential().clone()), secret).await {
            warn!(user_id = %user.id(), reason = "credential mismatch", "login rejected");
            return Err(AuthenticationError::InvalidCredentials);
        }

        self.migrate_legacy_credential(&user, secret).await;

        let session = Session::start(user.authenticated(), &*self.clock);
        self.sessions.save(&session).await?;
        info!(
            user_id = %user.id(),
            role = %user.role(),
            session_id = %session.id(),
            "login succeeded"
        );
        Ok(session)
    }

    async fn migrate_legacy_credential(&self, user: &User, secret: &str) {
        let Some(cost) = self.rehash_cost else {
            return;
        };
        if !user.credential().is_legacy() {
            return;
        }
        let supplied = secret.to_owned();
        let rehashed = tokio::task::spawn_blocking(move || Credential::hash(&supplied, cost)).await;
        let hashed = match rehashed {
            Ok(Ok(hashed)) => hashed,
            Ok(Err(err)) => {
                warn!(user_id = %user.id(), error = %err, "legacy credential rehash failed");
                return;
            }
            Err(err) => {
                warn!(user_id = %user.id(), error = %err, "legacy credential rehash failed");
                return;
            }
        };
        match self.users.update_credential(user.id(), &hashed).await {
            Ok(()) => info!(user_id = %user.id(), "legacy credential migrated"),
            Err(err) => {
                warn!(user_id = %user.id(), error = %err, "legacy credential rehash failed");
            }
        }
    }

    /// Ends a session. Ending an unknown session is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Sessions`] on storage failure.
    pub async fn logout(&self, session_id: SessionId) -> AuthenticationResult<()> {
        if self.sessions.remove(session_id).await? {
            info!(%session_id, "session ended");
        }
        Ok(())
    }

    /// Looks up a live session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::SessionNotFound`] when the session is
    /// unknown or has ended.
    pub async fn session(&self, session_id: SessionId) -> AuthenticationResult<Session> {
        self.sessions
            .find(session_id)
            .await?
            .ok_or(AuthenticationError::SessionNotFound(session_id))
    }

    /// Stores a theme preference on the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Denied`] when the role lacks
    /// `manage_settings`, or [`AuthenticationError::SessionNotFound`].
    pub async fn set_theme(
        &self,
        session_id: SessionId,
        theme: Theme,
    ) -> AuthenticationResult<Session> {
        let mut session = self.session(session_id).await?;
        require(session.user().role, Action::ManageSettings)?;
        session.set_theme(theme);
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Sends access recovery instructions to a known address.
    ///
    /// The returned acknowledgement is identical for known and unknown
    /// addresses; no credential is ever sent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Users`] on storage failure.
    pub async fn recover_access(&self, email: &str) -> AuthenticationResult<&'static str> {
        let Ok(address) = EmailAddress::new(email) else {
            return Ok(RECOVERY_ACKNOWLEDGEMENT);
        };
        if self.users.find_by_email(&address).await?.is_some() {
            self.notifier
                .emit(&LifecycleEvent::AccessRecoveryRequested { email: address });
        } else {
            warn!(email = %address, "access recovery requested for unknown address");
        }
        Ok(RECOVERY_ACKNOWLEDGEMENT)
    }

    /// Returns the credential-free user directory.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Users`] on storage failure.
    pub async fn list_users(&self) -> AuthenticationResult<Vec<AuthenticatedUser>> {
        let users = self.users.list().await?;
        Ok(users.iter().map(User::authenticated).collect())
    }

    /// Returns the users who may be assigned as project managers.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Users`] on storage failure.
    pub async fn list_managers(&self) -> AuthenticationResult<Vec<AuthenticatedUser>> {
        let users = self.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.role == Role::Manager)
            .collect())
    }
}

/// Builds the decoy record, falling back to an unparsable hash when `cost`
/// is rejected so the check still fails closed.
fn decoy_record(cost: u32) -> Credential {
    Credential::hash(DECOY_SECRET, cost).unwrap_or_else(|err| {
        warn!(error = %err, cost, "decoy credential could not be hashed");
        Credential::Hashed(String::new())
    })
}
