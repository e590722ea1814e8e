//! Domain model for lifecycle notifications.

mod event;
mod message;

pub use event::LifecycleEvent;
pub use message::{Notification, OutboundMessage};
