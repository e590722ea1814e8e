//! Recording transport used in tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::notification::{
    domain::OutboundMessage,
    ports::{MessageTransport, TransportError, TransportResult},
};

/// Transport that keeps every delivered message in memory.
///
/// When switched offline it fails every delivery, simulating an outage.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    delivered: Vec<OutboundMessage>,
    offline: bool,
}

impl RecordingTransport {
    /// Creates an online transport with no recorded messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that fails every delivery.
    #[must_use]
    pub fn offline() -> Self {
        let transport = Self::default();
        transport.set_offline(true);
        transport
    }

    /// Switches the simulated outage on or off.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.offline = offline;
        }
    }

    /// Returns the messages delivered so far.
    #[must_use]
    pub fn delivered(&self) -> Vec<OutboundMessage> {
        self.state
            .lock()
            .map(|state| state.delivered.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send(&self, message: OutboundMessage) -> TransportResult<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| TransportError::Unavailable(err.to_string()))?;
        if state.offline {
            return Err(TransportError::Unavailable(
                "simulated transport outage".to_owned(),
            ));
        }
        state.delivered.push(message);
        Ok(())
    }
}
