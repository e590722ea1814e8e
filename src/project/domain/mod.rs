//! Domain model for projects.

mod details;
mod error;
mod ids;
mod project;

pub use details::{Budget, ProjectDetails};
pub use error::{ParseProjectStateError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{PersistedProjectData, Project, ProjectState};
