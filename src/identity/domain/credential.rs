//! Stored credential records in legacy and hashed form.

use super::IdentityDomainError;
use std::fmt;
use subtle::ConstantTimeEq;

/// Prefixes identifying a bcrypt hashed record.
pub const HASH_MARKERS: [&str; 3] = ["$2b$", "$2a$", "$2y$"];

/// A stored credential record.
///
/// The scheme is resolved from the stored text: anything carrying one of the
/// [`HASH_MARKERS`] is a hash, everything else is a legacy plaintext secret.
/// New records are only ever produced through [`Credential::hash`].
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Secret stored verbatim before the hashing migration.
    LegacyPlaintext(String),
    /// bcrypt hash of the secret.
    Hashed(String),
}

impl Credential {
    /// Classifies a stored record by its marker prefix.
    #[must_use]
    pub fn from_stored(record: impl Into<String>) -> Self {
        let raw = record.into();
        if HASH_MARKERS.iter().any(|marker| raw.starts_with(marker)) {
            Self::Hashed(raw)
        } else {
            Self::LegacyPlaintext(raw)
        }
    }

    /// Hashes `secret` into a new record.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::Hashing`] when `cost` is outside the
    /// range bcrypt accepts.
    pub fn hash(secret: &str, cost: u32) -> Result<Self, IdentityDomainError> {
        bcrypt::hash(secret, cost)
            .map(Self::Hashed)
            .map_err(|err| IdentityDomainError::Hashing(err.to_string()))
    }

    /// Checks `supplied` against this record.
    ///
    /// Hashed records use bcrypt's constant-time comparison; a malformed hash
    /// fails closed. Legacy records are compared byte-for-byte in constant
    /// time over equal-length inputs. Only the hashed branch pays the bcrypt
    /// work factor, so the scheme of an account remains observable through
    /// response timing until every record has been migrated.
    #[must_use]
    pub fn verify(&self, supplied: &str) -> bool {
        match self {
            Self::Hashed(hash) => bcrypt::verify(supplied, hash).unwrap_or(false),
            Self::LegacyPlaintext(secret) => secret.as_bytes().ct_eq(supplied.as_bytes()).into(),
        }
    }

    /// Returns whether the record still uses the legacy scheme.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyPlaintext(_))
    }

    /// Returns the text to persist for this record.
    #[must_use]
    pub fn as_stored(&self) -> &str {
        match self {
            Self::LegacyPlaintext(value) | Self::Hashed(value) => value,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LegacyPlaintext(_) => f.write_str("LegacyPlaintext(<redacted>)"),
            Self::Hashed(_) => f.write_str("Hashed(<redacted>)"),
        }
    }
}

/// Verifies `supplied` against a raw stored record.
///
/// Never panics and never reports an error: any mismatch or malformed record
/// yields `false`.
#[must_use]
pub fn verify(stored_record: &str, supplied: &str) -> bool {
    Credential::from_stored(stored_record).verify(supplied)
}
