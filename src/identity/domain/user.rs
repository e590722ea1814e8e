//! User records and their credential-free projection.

use super::{Credential, IdentityDomainError, UserId};
use crate::access::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalised contact address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated address, trimmed and lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidEmail`] unless the value has a
    /// non-empty local part, a single `@` and a non-empty domain, with no
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A provisioned studio user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    role: Role,
    email: EmailAddress,
    credential: Credential,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
    /// Contact address.
    pub email: EmailAddress,
    /// Stored credential record.
    pub credential: Credential,
}

/// Unpersisted user used by provisioning adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
    /// Contact address.
    pub email: EmailAddress,
    /// Credential record to store.
    pub credential: Credential,
}

impl UserDraft {
    /// Creates a draft after validating the display name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        email: EmailAddress,
        credential: Credential,
    ) -> Result<Self, IdentityDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityDomainError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            role,
            email,
            credential,
        })
    }
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            role: data.role,
            email: data.email,
            credential: data.credential,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the contact address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored credential record.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Replaces the credential record.
    pub fn replace_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    /// Returns the projection exposed to callers after login.
    #[must_use]
    pub fn authenticated(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
            email: self.email.clone(),
        }
    }
}

/// User details without the credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
    /// Contact address.
    pub email: EmailAddress,
}
