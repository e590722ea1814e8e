//! Projects and their one-way lifecycle.
//!
//! A project is created `Active` by a manager and may later be archived;
//! an archived project never becomes active again. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
