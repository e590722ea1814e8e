//! Unit tests for deadline risk classification.
