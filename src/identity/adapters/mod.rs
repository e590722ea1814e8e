//! Adapter implementations for identity ports.

pub mod hashing;
pub mod memory;
pub mod postgres;
