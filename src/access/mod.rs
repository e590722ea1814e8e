//! Capability gate for role-based access control.
//!
//! Every mutating action and every privileged read is preceded by a lookup in
//! the static role-to-action table defined here. The gate only knows about
//! action classes; which project or task is touched is the caller's concern,
//! with the single exception of the task ownership predicate used for
//! freelancer status changes.

mod action;
mod gate;
mod role;

pub use action::Action;
pub use gate::{AccessDenied, CapabilitySet, authorize, require};
pub use role::{ParseRoleError, Role};

#[cfg(test)]
mod tests;
