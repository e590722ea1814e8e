//! Unit tests for the resource module.
