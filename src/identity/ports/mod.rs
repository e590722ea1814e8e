//! Port contracts for identity management.
//!
//! Ports define infrastructure-agnostic interfaces used by identity services.

pub mod repository;
pub mod session;
pub mod verifier;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use session::{SessionStore, SessionStoreError, SessionStoreResult};
pub use verifier::CredentialVerifier;
