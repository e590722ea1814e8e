//! In-memory project repository for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{PersistedProjectData, Project, ProjectDetails, ProjectId, ProjectState},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: BTreeMap<ProjectId, Project>,
    last_id: i64,
}

fn lock_error(err: impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, details: ProjectDetails) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let project = Project::from_persisted(PersistedProjectData {
            id: ProjectId::new(state.last_id),
            details,
            state: ProjectState::Active,
        });
        state.projects.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn list_by_state(&self, wanted: ProjectState) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .projects
            .values()
            .filter(|project| project.state() == wanted)
            .cloned()
            .collect())
    }

    async fn update_details(
        &self,
        id: ProjectId,
        details: &ProjectDetails,
    ) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let project = state
            .projects
            .get_mut(&id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        project.replace_details(details.clone());
        Ok(())
    }

    async fn update_state(
        &self,
        id: ProjectId,
        new_state: ProjectState,
    ) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let project = state
            .projects
            .get_mut(&id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        *project = Project::from_persisted(PersistedProjectData {
            id,
            details: project.details().clone(),
            state: new_state,
        });
        Ok(())
    }
}
