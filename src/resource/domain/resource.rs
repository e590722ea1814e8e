//! Resource entity and creation input.

use super::{ParseResourceCategoryError, ResourceDomainError, ResourceId};
use crate::project::domain::ProjectId;
use serde::Serialize;
use std::fmt;

/// Locator recorded for resources registered without an uploaded file.
pub const LINK_ONLY_LOCATOR: &str = "#";

/// Section of the project page a resource belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Design documents, briefs and references.
    Documentation,
    /// Produced assets and builds.
    Deliverable,
}

impl ResourceCategory {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Deliverable => "deliverable",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResourceCategory {
    type Error = ParseResourceCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "documentation" | "documentacion" | "documentación" => Ok(Self::Documentation),
            "deliverable" | "recurso" => Ok(Self::Deliverable),
            _ => Err(ParseResourceCategoryError(value.to_owned())),
        }
    }
}

/// Validated input for a new resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    /// Display name.
    pub name: String,
    /// Free-form kind label such as "PDF" or "Link".
    pub kind: String,
    /// Where the content lives.
    pub locator: String,
    /// Page section.
    pub category: ResourceCategory,
    /// Parent project.
    pub project: ProjectId,
}

impl ResourceDraft {
    /// Validates and builds a draft.
    ///
    /// A missing or blank locator is recorded as [`LINK_ONLY_LOCATOR`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceDomainError::MissingField`] when the name is blank.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        locator: Option<String>,
        category: ResourceCategory,
        project: ProjectId,
    ) -> Result<Self, ResourceDomainError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ResourceDomainError::MissingField { field: "name" });
        }
        let locator = locator
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| LINK_ONLY_LOCATOR.to_owned());
        Ok(Self {
            name,
            kind: kind.into(),
            locator,
            category,
            project,
        })
    }
}

/// Parameter object for reconstructing a persisted resource.
#[derive(Debug, Clone)]
pub struct PersistedResourceData {
    /// Resource identifier.
    pub id: ResourceId,
    /// Stored fields.
    pub draft: ResourceDraft,
}

/// A document or deliverable attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    id: ResourceId,
    name: String,
    kind: String,
    locator: String,
    category: ResourceCategory,
    project: ProjectId,
}

impl Resource {
    /// Reconstructs a resource from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedResourceData) -> Self {
        let ResourceDraft {
            name,
            kind,
            locator,
            category,
            project,
        } = data.draft;
        Self {
            id: data.id,
            name,
            kind,
            locator,
            category,
            project,
        }
    }

    /// Returns the resource identifier.
    #[must_use]
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind label.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the locator.
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Returns the page section.
    #[must_use]
    pub const fn category(&self) -> ResourceCategory {
        self.category
    }

    /// Returns the parent project.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }
}
