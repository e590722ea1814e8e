//! Orchestration services for authentication and sessions.

mod authentication;

pub use authentication::{
    AuthenticationError, AuthenticationResult, AuthenticationService, RECOVERY_ACKNOWLEDGEMENT,
};
