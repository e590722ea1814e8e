//! Unit tests for the identity module.

mod authentication_tests;
