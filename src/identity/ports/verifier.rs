//! Credential verification port.

use crate::identity::domain::Credential;

/// Checks a supplied secret against a stored credential.
///
/// Implementations may be CPU-heavy; callers run them on the blocking pool.
pub trait CredentialVerifier: Send + Sync {
    /// Returns whether `supplied` matches `credential`.
    fn verify(&self, credential: &Credential, supplied: &str) -> bool;
}
