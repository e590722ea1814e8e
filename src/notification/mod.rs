//! Best-effort lifecycle notifications.
//!
//! Lifecycle services emit [`domain::LifecycleEvent`]s after their write has
//! committed. The [`services::NotificationDispatcher`] only enqueues them; a
//! background worker renders and delivers each message through a
//! [`ports::MessageTransport`], logging and discarding any failure. Nothing
//! is retried or deduplicated, and a caller never waits on
//! delivery. The module follows hexagonal architecture:
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
