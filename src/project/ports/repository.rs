//! Repository port for project persistence.

use crate::project::domain::{Project, ProjectDetails, ProjectId, ProjectState};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new active project and returns it with its assigned
    /// identifier.
    async fn insert(&self, details: ProjectDetails) -> ProjectRepositoryResult<Project>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project ordered by identifier.
    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns the projects in `state` ordered by identifier.
    async fn list_by_state(&self, state: ProjectState) -> ProjectRepositoryResult<Vec<Project>>;

    /// Replaces every editable field of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update_details(
        &self,
        id: ProjectId,
        details: &ProjectDetails,
    ) -> ProjectRepositoryResult<()>;

    /// Overwrites the lifecycle state of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does
    /// not exist.
    async fn update_state(&self, id: ProjectId, state: ProjectState)
    -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
