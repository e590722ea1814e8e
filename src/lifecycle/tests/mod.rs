//! Unit tests for the lifecycle coordinator.
