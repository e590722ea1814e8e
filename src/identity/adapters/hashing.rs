//! bcrypt-backed credential verification.

use crate::identity::{domain::Credential, ports::CredentialVerifier};

/// Verifier dispatching on the stored scheme: bcrypt for hashed records,
/// constant-time equality for legacy ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptVerifier;

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, credential: &Credential, supplied: &str) -> bool {
        credential.verify(supplied)
    }
}
