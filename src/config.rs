//! Runtime settings for the tracker.
//!
//! Settings can be deserialised from any serde source or read from the
//! process environment. Every field has a default so a bare environment
//! yields a usable local configuration.

use crate::lifecycle::{ArchiveGuard, TaskOwnershipPolicy};
use crate::risk::ReferenceFrame;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DELIVERY_DEADLINE_SECS: u64 = 30;
const DEFAULT_OFFSET_MINUTES: i32 = -300;
const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Errors returned while loading settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    Invalid {
        /// Name of the offending variable.
        key: &'static str,
        /// Raw value that was rejected.
        value: String,
    },
}

/// Outbound mail relay settings.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    /// Relay host name.
    pub host: String,
    /// Relay port; implicit TLS is used.
    pub port: u16,
    /// Login name, if the relay requires authentication.
    pub username: Option<String>,
    /// Login secret, if the relay requires authentication.
    pub password: Option<String>,
    /// Display name used in the `From` header.
    pub sender_name: String,
    /// Address used in the `From` header.
    pub sender_address: String,
    /// Connection, greeting and socket timeout in seconds.
    pub timeout_secs: u64,
}

impl SmtpSettings {
    /// Returns the transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_owned(),
            port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
            sender_name: "SGP Gametech".to_owned(),
            sender_address: "no-reply@localhost".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("sender_name", &self.sender_name)
            .field("sender_address", &self.sender_address)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Policy choices left to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    /// Who may change the status of a task beyond the role check.
    pub task_ownership: TaskOwnershipPolicy,
    /// Whether archiving is refused while late tasks are open.
    pub archive_guard: ArchiveGuard,
    /// Whether a matching legacy credential is rewritten as a hash at login.
    pub rehash_legacy_credentials: bool,
    /// bcrypt work factor for newly hashed credentials.
    pub hash_cost: u32,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            task_ownership: TaskOwnershipPolicy::default(),
            archive_guard: ArchiveGuard::default(),
            rehash_legacy_credentials: false,
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

/// Top-level tracker settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Mail relay used for notifications.
    pub smtp: SmtpSettings,
    /// Studio name shown in notification headers.
    pub studio_name: String,
    /// UTC offset, in minutes, of the calendar used for deadline risk.
    pub reference_offset_minutes: i32,
    /// Upper bound on one notification delivery, in seconds.
    pub delivery_deadline_secs: u64,
    /// Operator policy choices.
    pub policy: PolicySettings,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            smtp: SmtpSettings::default(),
            studio_name: "Gametech SGP".to_owned(),
            reference_offset_minutes: DEFAULT_OFFSET_MINUTES,
            delivery_deadline_secs: DEFAULT_DELIVERY_DEADLINE_SECS,
            policy: PolicySettings::default(),
        }
    }
}

impl TrackerSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable cannot be parsed or
    /// the risk offset is not a valid UTC offset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(host) = lookup("SMTP_HOST") {
            settings.smtp.host = host;
        }
        if let Some(port) = parse_var(&lookup, "SMTP_PORT")? {
            settings.smtp.port = port;
        }
        settings.smtp.username = lookup("EMAIL_USER");
        settings.smtp.password = lookup("EMAIL_PASS");
        if let Some(name) = lookup("EMAIL_SENDER_NAME") {
            settings.smtp.sender_name = name;
        }
        if let Some(address) = lookup("EMAIL_SENDER_ADDRESS").or_else(|| lookup("EMAIL_USER")) {
            settings.smtp.sender_address = address;
        }
        if let Some(secs) = parse_var(&lookup, "EMAIL_TIMEOUT_SECS")? {
            settings.smtp.timeout_secs = secs;
        }
        if let Some(name) = lookup("STUDIO_NAME") {
            settings.studio_name = name;
        }
        if let Some(minutes) = parse_var(&lookup, "RISK_UTC_OFFSET_MINUTES")? {
            settings.reference_offset_minutes = minutes;
        }
        if let Some(secs) = parse_var(&lookup, "NOTIFICATION_DEADLINE_SECS")? {
            settings.delivery_deadline_secs = secs;
        }
        if let Some(policy) = parse_var(&lookup, "TASK_OWNERSHIP")? {
            settings.policy.task_ownership = policy;
        }
        if let Some(guard) = parse_var(&lookup, "ARCHIVE_GUARD")? {
            settings.policy.archive_guard = guard;
        }
        if let Some(rehash) = parse_var(&lookup, "REHASH_LEGACY_CREDENTIALS")? {
            settings.policy.rehash_legacy_credentials = rehash;
        }

        settings.reference_frame()?;
        Ok(settings)
    }

    /// Returns the calendar used for deadline risk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the offset is outside ±24 hours.
    pub fn reference_frame(&self) -> Result<ReferenceFrame, ConfigError> {
        ReferenceFrame::from_offset_minutes(self.reference_offset_minutes).ok_or_else(|| {
            ConfigError::Invalid {
                key: "RISK_UTC_OFFSET_MINUTES",
                value: self.reference_offset_minutes.to_string(),
            }
        })
    }

    /// Returns the per-delivery deadline for the dispatcher.
    #[must_use]
    pub const fn delivery_deadline(&self) -> Duration {
        Duration::from_secs(self.delivery_deadline_secs)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { key, value: raw.clone() })
        })
        .transpose()
}
