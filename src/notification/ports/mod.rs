//! Port contracts for notification delivery.

pub mod transport;

pub use transport::{MessageTransport, TransportError, TransportResult};
