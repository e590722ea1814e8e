//! Adapter implementations for resource persistence.

pub mod memory;
pub mod postgres;
