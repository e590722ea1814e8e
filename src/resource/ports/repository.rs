//! Repository port for resource records.

use crate::project::domain::ProjectId;
use crate::resource::domain::{Resource, ResourceDraft, ResourceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resource repository operations.
pub type ResourceRepositoryResult<T> = Result<T, ResourceRepositoryError>;

/// Resource persistence contract.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Stores a new resource and returns it with its assigned identifier.
    async fn insert(&self, draft: ResourceDraft) -> ResourceRepositoryResult<Resource>;

    /// Finds a resource by identifier.
    ///
    /// Returns `None` when the resource does not exist.
    async fn find_by_id(&self, id: ResourceId) -> ResourceRepositoryResult<Option<Resource>>;

    /// Returns the resources of one project ordered by identifier.
    async fn list_for_project(&self, project: ProjectId)
    -> ResourceRepositoryResult<Vec<Resource>>;

    /// Deletes a resource record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceRepositoryError::NotFound`] when the resource does
    /// not exist.
    async fn delete(&self, id: ResourceId) -> ResourceRepositoryResult<()>;
}

/// Errors returned by resource repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ResourceRepositoryError {
    /// The resource was not found.
    #[error("resource not found: {0}")]
    NotFound(ResourceId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ResourceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
