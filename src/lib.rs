//! Atelier: project and task tracking for a studio team.
//!
//! Managers create projects and assign tasks to collaborators; the role of the
//! acting user decides what they may see and do. The crate is the access
//! controlled lifecycle and risk engine behind that workflow.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, mail, etc.)
//!
//! # Modules
//!
//! - [`access`]: Role to capability mapping consulted before every action
//! - [`identity`]: Users, dual-scheme credential verification and sessions
//! - [`project`]: Project records and their one-way lifecycle
//! - [`task`]: Task records and their monotonic status lifecycle
//! - [`resource`]: Documentation and deliverables attached to projects
//! - [`risk`]: Deadline risk classification over calendar dates
//! - [`lifecycle`]: Gated coordination of every mutating action
//! - [`notification`]: Best-effort, non-blocking lifecycle notifications
//! - [`reporting`]: Dashboard and report figures built on the read paths
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Structured logging set-up

pub mod access;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod notification;
pub mod project;
pub mod reporting;
pub mod resource;
pub mod risk;
pub mod task;
pub mod telemetry;

#[cfg(test)]
mod testing;
