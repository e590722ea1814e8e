//! Structured logging setup for embedding applications.
//!
//! The library itself only emits `tracing` events; hosts call
//! [`init_tracing`] once at start-up to route them somewhere useful.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TelemetryFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable multi-line output.
    #[default]
    Pretty,
}

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TelemetryError(#[from] TryInitError);

/// Installs the global subscriber.
///
/// The filter is read from `RUST_LOG`; an absent or malformed value falls
/// back to `info`.
///
/// # Errors
///
/// Returns [`TelemetryError`] if a global subscriber was already set.
pub fn init_tracing(format: TelemetryFormat) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        TelemetryFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()?,
        TelemetryFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
    }
    Ok(())
}
