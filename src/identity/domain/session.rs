//! Explicit per-login session context.

use super::{AuthenticatedUser, ParseThemeError, SessionId, UserId};
use crate::access::Role;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Display theme preference kept with the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark palette.
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl Theme {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ParseThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseThemeError(value.to_owned())),
        }
    }
}

/// Identity of the user performing an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    name: String,
    role: Role,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
        }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the acting user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the acting user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// Context created by a successful login and discarded at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user: AuthenticatedUser,
    theme: Theme,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a new session for `user`.
    #[must_use]
    pub fn start(user: AuthenticatedUser, clock: &impl Clock) -> Self {
        Self {
            id: SessionId::new(),
            user,
            theme: Theme::default(),
            started_at: clock.utc(),
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the logged-in user.
    #[must_use]
    pub const fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    /// Returns the theme preference.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Sets the theme preference.
    pub const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns the actor passed to lifecycle operations.
    #[must_use]
    pub fn actor(&self) -> Actor {
        Actor::new(self.user.id, self.user.name.clone(), self.user.role)
    }
}
