//! In-memory task repository for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(state.last_id),
            title: draft.title,
            assignee: draft.assignee,
            project: draft.project,
            due_date: draft.due_date,
            status: TaskStatus::Todo,
        });
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_for_project(&self, project: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project() == project)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        *task = Task::from_persisted(PersistedTaskData {
            id,
            title: task.title().to_owned(),
            assignee: task.assignee(),
            project: task.project(),
            due_date: task.due_date(),
            status,
        });
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
