//! Documentation and deliverables attached to projects.
//!
//! File storage is external; a resource records only a display name, a
//! kind label and a locator for wherever the bytes live.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
