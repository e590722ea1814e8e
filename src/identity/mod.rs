//! User identity, credential verification and request sessions.
//!
//! Stored credentials exist in two schemes while the studio migrates away
//! from plaintext secrets: legacy records compared by equality and bcrypt
//! records recognised by their `$2b$` marker. A successful login creates an
//! explicit [`domain::Session`] that request handlers carry instead of any
//! global "current user" state. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
