//! Flat role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Role held by a studio user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Owns projects and may perform every action.
    Manager,
    /// Studio staff working on tasks without project ownership.
    InternalTeam,
    /// External collaborator limited to their own task progress.
    Freelancer,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Self; 3] = [Self::Manager, Self::InternalTeam, Self::Freelancer];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::InternalTeam => "internal_team",
            Self::Freelancer => "freelancer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "manager" | "Manager" => Ok(Self::Manager),
            "internal_team" | "InternalTeam" => Ok(Self::InternalTeam),
            "freelancer" | "Freelancer" => Ok(Self::Freelancer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned when a role value is not one of the three enumerators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
