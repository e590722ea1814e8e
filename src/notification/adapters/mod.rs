//! Adapter implementations for the transport port.

pub mod memory;
pub mod smtp;
