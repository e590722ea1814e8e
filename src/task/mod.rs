//! Tasks attached to projects and their status lifecycle.
//!
//! A task starts as `To-Do` and moves forward one step at a time until it is
//! `Done`. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
