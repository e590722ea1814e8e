//! Outbound message transport port.

use crate::notification::domain::OutboundMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Delivery channel for rendered messages.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Attempts to deliver one message.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the message cannot be handed over.
    async fn send(&self, message: OutboundMessage) -> TransportResult<()>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// An address could not be used by the transport.
    #[error("invalid address: {0}")]
    Address(String),

    /// The transport is not reachable.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The transport refused or failed the delivery.
    #[error("delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
