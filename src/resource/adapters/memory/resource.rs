//! In-memory resource repository for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::resource::{
    domain::{PersistedResourceData, Resource, ResourceDraft, ResourceId},
    ports::{ResourceRepository, ResourceRepositoryError, ResourceRepositoryResult},
};

/// Thread-safe in-memory resource repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceRepository {
    state: Arc<RwLock<InMemoryResourceState>>,
}

#[derive(Debug, Default)]
struct InMemoryResourceState {
    resources: BTreeMap<ResourceId, Resource>,
    last_id: i64,
}

fn lock_error(err: impl ToString) -> ResourceRepositoryError {
    ResourceRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryResourceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn insert(&self, draft: ResourceDraft) -> ResourceRepositoryResult<Resource> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let resource = Resource::from_persisted(PersistedResourceData {
            id: ResourceId::new(state.last_id),
            draft,
        });
        state.resources.insert(resource.id(), resource.clone());
        Ok(resource)
    }

    async fn find_by_id(&self, id: ResourceId) -> ResourceRepositoryResult<Option<Resource>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.resources.get(&id).cloned())
    }

    async fn list_for_project(
        &self,
        project: ProjectId,
    ) -> ResourceRepositoryResult<Vec<Resource>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .resources
            .values()
            .filter(|resource| resource.project() == project)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ResourceId) -> ResourceRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .resources
            .remove(&id)
            .map(|_| ())
            .ok_or(ResourceRepositoryError::NotFound(id))
    }
}
