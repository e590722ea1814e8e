//! Gated coordination of every lifecycle action.
//!
//! [`LifecycleCoordinator`] is the single entry point for creating, editing,
//! transitioning and deleting projects, tasks and resources. Each action is
//! checked against the capability gate before anything is read or written,
//! is applied as one store write, and only then emits its notification onto
//! the dispatcher queue. Read paths attach deadline risk through the shared
//! [`crate::risk::RiskClassifier`].

mod coordinator;
mod error;
mod policy;
mod view;

pub use coordinator::{LifecycleCoordinator, Repositories};
pub use error::{ErrorKind, LifecycleError, LifecycleResult};
pub use policy::{ArchiveGuard, LifecyclePolicy, ParsePolicyError, TaskOwnershipPolicy};
pub use view::{AssessedTask, ProjectDetail};

#[cfg(test)]
mod tests;
