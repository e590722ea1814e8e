//! Project entity and lifecycle state.

use super::{ParseProjectStateError, ProjectDetails, ProjectDomainError, ProjectId};
use serde::Serialize;
use std::fmt;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    /// Work is ongoing.
    Active,
    /// The project is closed and kept for reference.
    Archived,
}

impl ProjectState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectState {
    type Error = ParseProjectStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "active" | "activo" => Ok(Self::Active),
            "archived" | "archivado" => Ok(Self::Archived),
            _ => Err(ParseProjectStateError(value.to_owned())),
        }
    }
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone)]
pub struct PersistedProjectData {
    /// Project identifier.
    pub id: ProjectId,
    /// Editable fields.
    pub details: ProjectDetails,
    /// Lifecycle state.
    pub state: ProjectState,
}

/// A studio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    details: ProjectDetails,
    state: ProjectState,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            state: data.state,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ProjectState {
        self.state
    }

    /// Returns whether the project is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, ProjectState::Active)
    }

    /// Replaces every editable field.
    pub fn replace_details(&mut self, details: ProjectDetails) {
        self.details = details;
    }

    /// Archives the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AlreadyArchived`] when the project is
    /// not active.
    pub fn archive(&mut self) -> Result<(), ProjectDomainError> {
        if !self.is_active() {
            return Err(ProjectDomainError::AlreadyArchived(self.id));
        }
        self.state = ProjectState::Archived;
        Ok(())
    }
}
