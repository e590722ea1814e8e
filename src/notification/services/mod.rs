//! Rendering and dispatch services for notifications.

mod dispatcher;
mod render;

pub use dispatcher::{DeliveryStats, DispatchWorker, NotificationDispatcher};
pub use render::{NotificationRenderer, RenderError};
