//! The lifecycle coordinator.

use super::{
    ArchiveGuard, AssessedTask, ErrorKind, LifecycleError, LifecyclePolicy, LifecycleResult,
    ProjectDetail, TaskOwnershipPolicy,
};
use crate::access::{Action, Role, require};
use crate::identity::{
    domain::{Actor, User, UserId},
    ports::UserRepository,
};
use crate::notification::{domain::LifecycleEvent, services::NotificationDispatcher};
use crate::project::{
    domain::{Project, ProjectDetails, ProjectId, ProjectState},
    ports::ProjectRepository,
};
use crate::resource::{
    domain::{Resource, ResourceCategory, ResourceDraft, ResourceId},
    ports::{ResourceRepository, ResourceRepositoryError},
};
use crate::risk::{RiskClassifier, RiskTier};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{error, info};

/// Store ports the coordinator writes through.
#[derive(Clone)]
pub struct Repositories {
    /// Project store.
    pub projects: Arc<dyn ProjectRepository>,
    /// Task store.
    pub tasks: Arc<dyn TaskRepository>,
    /// User directory.
    pub users: Arc<dyn UserRepository>,
    /// Resource store.
    pub resources: Arc<dyn ResourceRepository>,
}

/// Converts a store error, logging it when the store itself failed.
fn store_failure<E>(operation: &'static str) -> impl FnOnce(E) -> LifecycleError
where
    E: Into<LifecycleError>,
{
    move |err| {
        let converted = err.into();
        if converted.kind() == ErrorKind::Persistence {
            error!(operation, error = %converted, "store operation failed");
        }
        converted
    }
}

/// Owns the allowed transitions of projects, tasks and resources.
pub struct LifecycleCoordinator<C>
where
    C: Clock + Send + Sync,
{
    stores: Repositories,
    notifier: NotificationDispatcher,
    risk: RiskClassifier<C>,
    policy: LifecyclePolicy,
}

impl<C> LifecycleCoordinator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a coordinator.
    #[must_use]
    pub const fn new(
        stores: Repositories,
        notifier: NotificationDispatcher,
        risk: RiskClassifier<C>,
        policy: LifecyclePolicy,
    ) -> Self {
        Self {
            stores,
            notifier,
            risk,
            policy,
        }
    }

    /// Returns the classifier used by read paths.
    #[must_use]
    pub const fn risk(&self) -> &RiskClassifier<C> {
        &self.risk
    }

    /// Creates an active project and notifies its manager.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `create_project`,
    /// [`LifecycleError::InvalidReference`] when the manager is unknown or
    /// not a manager, or a store error.
    pub async fn create_project(
        &self,
        actor: &Actor,
        details: ProjectDetails,
    ) -> LifecycleResult<Project> {
        require(actor.role(), Action::CreateProject)?;
        let manager = self.resolve_manager(details.manager()).await?;
        let project = self
            .stores
            .projects
            .insert(details)
            .await
            .map_err(store_failure("create_project"))?;

        info!(
            project_id = %project.id(),
            actor = %actor.user_id(),
            manager = %manager.id(),
            "project created"
        );
        self.notifier.emit(&LifecycleEvent::ProjectAssigned {
            manager: manager.email().clone(),
            project_name: project.name().to_owned(),
        });
        Ok(project)
    }

    /// Replaces every editable field of a project.
    ///
    /// Archived projects may still be edited; their state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `edit_project`,
    /// [`LifecycleError::ProjectNotFound`], an invalid manager reference or a
    /// store error.
    pub async fn edit_project(
        &self,
        actor: &Actor,
        id: ProjectId,
        details: ProjectDetails,
    ) -> LifecycleResult<Project> {
        require(actor.role(), Action::EditProject)?;
        let mut project = self.load_project(id).await?;
        self.resolve_manager(details.manager()).await?;
        self.stores
            .projects
            .update_details(id, &details)
            .await
            .map_err(store_failure("edit_project"))?;

        project.replace_details(details);
        info!(project_id = %id, actor = %actor.user_id(), "project edited");
        Ok(project)
    }

    /// Archives an active project.
    ///
    /// Under [`ArchiveGuard::Permissive`] late open tasks do not block the
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `archive_project`,
    /// [`LifecycleError::ProjectNotFound`], a domain error when the project
    /// is already archived, [`LifecycleError::LateTasksOpen`] under
    /// [`ArchiveGuard::RejectLateOpenTasks`], or a store error.
    pub async fn archive_project(&self, actor: &Actor, id: ProjectId) -> LifecycleResult<Project> {
        require(actor.role(), Action::ArchiveProject)?;
        let mut project = self.load_project(id).await?;
        project.archive()?;

        if self.policy.archive_guard == ArchiveGuard::RejectLateOpenTasks {
            let tasks = self
                .stores
                .tasks
                .list_for_project(id)
                .await
                .map_err(store_failure("archive_project"))?;
            let late_tasks = tasks
                .iter()
                .filter(|task| self.risk.classify_task(task) == RiskTier::Late)
                .count();
            if late_tasks > 0 {
                return Err(LifecycleError::LateTasksOpen {
                    project_id: id,
                    late_tasks,
                });
            }
        }

        self.stores
            .projects
            .update_state(id, ProjectState::Archived)
            .await
            .map_err(store_failure("archive_project"))?;
        info!(project_id = %id, actor = %actor.user_id(), "project archived");
        Ok(project)
    }

    /// Creates a `To-Do` task in an active project and notifies the
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `create_task`,
    /// [`LifecycleError::ProjectNotFound`],
    /// [`LifecycleError::ProjectArchived`], an invalid assignee reference or
    /// a store error.
    pub async fn create_task(&self, actor: &Actor, draft: TaskDraft) -> LifecycleResult<Task> {
        require(actor.role(), Action::CreateTask)?;
        let project = self.load_project(draft.project).await?;
        if !project.is_active() {
            return Err(LifecycleError::ProjectArchived(project.id()));
        }
        let assignee = self
            .load_user(draft.assignee)
            .await?
            .ok_or(LifecycleError::InvalidReference {
                field: "assignee",
                reason: "unknown user",
            })?;

        let task = self
            .stores
            .tasks
            .insert(draft)
            .await
            .map_err(store_failure("create_task"))?;

        info!(
            task_id = %task.id(),
            project_id = %project.id(),
            assignee = %assignee.id(),
            actor = %actor.user_id(),
            "task created"
        );
        self.notifier.emit(&LifecycleEvent::TaskAssigned {
            assignee: assignee.email().clone(),
            title: task.title().to_owned(),
            project_name: project.name().to_owned(),
            status: task.status(),
            due_date: task.due_date(),
        });
        Ok(task)
    }

    /// Moves a task to its next status.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `edit_task_status`,
    /// [`LifecycleError::NotAssignee`] when ownership is enforced,
    /// [`LifecycleError::TaskNotFound`], a domain error for a done task, or a
    /// store error.
    pub async fn advance_task(&self, actor: &Actor, id: TaskId) -> LifecycleResult<Task> {
        let mut task = self.load_owned_task(actor, id).await?;
        task.advance()?;
        self.commit_status(actor, &task).await?;
        Ok(task)
    }

    /// Moves a task to `target`, which must be its next status.
    ///
    /// # Errors
    ///
    /// As [`Self::advance_task`], with a domain error for skips and
    /// regressions such as `To-Do` to `Done`.
    pub async fn transition_task(
        &self,
        actor: &Actor,
        id: TaskId,
        target: TaskStatus,
    ) -> LifecycleResult<Task> {
        let mut task = self.load_owned_task(actor, id).await?;
        task.transition_to(target)?;
        self.commit_status(actor, &task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `delete_task`,
    /// [`LifecycleError::TaskNotFound`], or a store error.
    pub async fn delete_task(&self, actor: &Actor, id: TaskId) -> LifecycleResult<()> {
        require(actor.role(), Action::DeleteTask)?;
        self.stores
            .tasks
            .delete(id)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => LifecycleError::TaskNotFound(missing),
                other => store_failure("delete_task")(other),
            })?;
        info!(task_id = %id, actor = %actor.user_id(), "task deleted");
        Ok(())
    }

    /// Records a resource against an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `view_project_detail`,
    /// [`LifecycleError::ProjectNotFound`], or a store error.
    pub async fn register_resource(
        &self,
        actor: &Actor,
        draft: ResourceDraft,
    ) -> LifecycleResult<Resource> {
        require(actor.role(), Action::ViewProjectDetail)?;
        self.load_project(draft.project).await?;
        let resource = self
            .stores
            .resources
            .insert(draft)
            .await
            .map_err(store_failure("register_resource"))?;
        info!(
            resource_id = %resource.id(),
            project_id = %resource.project(),
            actor = %actor.user_id(),
            "resource registered"
        );
        Ok(resource)
    }

    /// Deletes a resource record.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `delete_resource`,
    /// [`LifecycleError::ResourceNotFound`], or a store error.
    pub async fn delete_resource(&self, actor: &Actor, id: ResourceId) -> LifecycleResult<()> {
        require(actor.role(), Action::DeleteResource)?;
        self.stores
            .resources
            .delete(id)
            .await
            .map_err(|err| match err {
                ResourceRepositoryError::NotFound(missing) => {
                    LifecycleError::ResourceNotFound(missing)
                }
                other => store_failure("delete_resource")(other),
            })?;
        info!(resource_id = %id, actor = %actor.user_id(), "resource deleted");
        Ok(())
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns a store error.
    pub async fn list_projects(&self) -> LifecycleResult<Vec<Project>> {
        self.stores
            .projects
            .list()
            .await
            .map_err(store_failure("list_projects"))
    }

    /// Returns the active projects.
    ///
    /// # Errors
    ///
    /// Returns a store error.
    pub async fn list_active_projects(&self) -> LifecycleResult<Vec<Project>> {
        self.stores
            .projects
            .list_by_state(ProjectState::Active)
            .await
            .map_err(store_failure("list_active_projects"))
    }

    /// Returns one project.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::ProjectNotFound`] or a store error.
    pub async fn find_project(&self, id: ProjectId) -> LifecycleResult<Project> {
        self.load_project(id).await
    }

    /// Returns a project with its assessed tasks and its resources.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Denied`] without `view_project_detail`,
    /// [`LifecycleError::ProjectNotFound`], or a store error.
    pub async fn project_detail(
        &self,
        actor: &Actor,
        id: ProjectId,
    ) -> LifecycleResult<ProjectDetail> {
        require(actor.role(), Action::ViewProjectDetail)?;
        let project = self.load_project(id).await?;
        let tasks = self.tasks_for_project(id).await?;
        let resources = self.resources_for_project(id).await?;
        let (documentation, deliverables): (Vec<Resource>, Vec<Resource>) = resources
            .into_iter()
            .partition(|resource| resource.category() == ResourceCategory::Documentation);

        Ok(ProjectDetail {
            risk: self.risk.classify_project(&project),
            project,
            tasks: self.assess(tasks),
            documentation,
            deliverables,
        })
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns a store error.
    pub async fn list_tasks(&self) -> LifecycleResult<Vec<Task>> {
        self.stores
            .tasks
            .list()
            .await
            .map_err(store_failure("list_tasks"))
    }

    /// Returns the tasks of one project.
    ///
    /// # Errors
    ///
    /// Returns a store error.
    pub async fn tasks_for_project(&self, id: ProjectId) -> LifecycleResult<Vec<Task>> {
        self.stores
            .tasks
            .list_for_project(id)
            .await
            .map_err(store_failure("tasks_for_project"))
    }

    /// Returns the resources of one project.
    ///
    /// # Errors
    ///
    /// Returns a store error.
    pub async fn resources_for_project(&self, id: ProjectId) -> LifecycleResult<Vec<Resource>> {
        self.stores
            .resources
            .list_for_project(id)
            .await
            .map_err(store_failure("resources_for_project"))
    }

    /// Pairs each task with its current risk tier.
    #[must_use]
    pub fn assess(&self, tasks: Vec<Task>) -> Vec<AssessedTask> {
        tasks
            .into_iter()
            .map(|task| AssessedTask {
                risk: self.risk.classify_task(&task),
                task,
            })
            .collect()
    }

    async fn load_project(&self, id: ProjectId) -> LifecycleResult<Project> {
        self.stores
            .projects
            .find_by_id(id)
            .await
            .map_err(store_failure("load_project"))?
            .ok_or(LifecycleError::ProjectNotFound(id))
    }

    async fn load_user(&self, id: UserId) -> LifecycleResult<Option<User>> {
        self.stores
            .users
            .find_by_id(id)
            .await
            .map_err(store_failure("load_user"))
    }

    async fn resolve_manager(&self, id: UserId) -> LifecycleResult<User> {
        let user = self
            .load_user(id)
            .await?
            .ok_or(LifecycleError::InvalidReference {
                field: "manager",
                reason: "unknown user",
            })?;
        if user.role() != Role::Manager {
            return Err(LifecycleError::InvalidReference {
                field: "manager",
                reason: "user is not a manager",
            });
        }
        Ok(user)
    }

    async fn load_owned_task(&self, actor: &Actor, id: TaskId) -> LifecycleResult<Task> {
        require(actor.role(), Action::EditTaskStatus)?;
        let task = self
            .stores
            .tasks
            .find_by_id(id)
            .await
            .map_err(store_failure("load_task"))?
            .ok_or(LifecycleError::TaskNotFound(id))?;

        let ownership_enforced = self.policy.task_ownership == TaskOwnershipPolicy::AssigneeOnly
            && actor.role() == Role::Freelancer;
        if ownership_enforced && task.assignee() != actor.user_id() {
            return Err(LifecycleError::NotAssignee {
                actor: actor.user_id(),
                task_id: id,
            });
        }
        Ok(task)
    }

    async fn commit_status(&self, actor: &Actor, task: &Task) -> LifecycleResult<()> {
        self.stores
            .tasks
            .update_status(task.id(), task.status())
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => LifecycleError::TaskNotFound(missing),
                other => store_failure("update_task_status")(other),
            })?;
        info!(
            task_id = %task.id(),
            status = %task.status(),
            actor = %actor.user_id(),
            "task status changed"
        );
        Ok(())
    }
}
