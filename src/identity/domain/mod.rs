//! Domain model for users, credentials and sessions.

mod credential;
mod error;
mod ids;
mod session;
mod user;

pub use credential::{Credential, HASH_MARKERS, verify};
pub use error::{IdentityDomainError, ParseThemeError};
pub use ids::{SessionId, UserId};
pub use session::{Actor, Session, Theme};
pub use user::{AuthenticatedUser, EmailAddress, PersistedUserData, User, UserDraft};
