//! `PostgreSQL` repository implementation for project persistence.

use super::{
    models::{ProjectDetailsRow, ProjectRow},
    schema::projects,
};
use crate::identity::domain::UserId;
use crate::project::{
    domain::{Budget, PersistedProjectData, Project, ProjectDetails, ProjectId, ProjectState},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }

    async fn load_where_state(
        &self,
        state: Option<ProjectState>,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let mut query = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .into_boxed();
            if let Some(wanted) = state {
                query = query.filter(projects::state.eq(wanted.as_str()));
            }
            let rows = query
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn insert(&self, details: ProjectDetails) -> ProjectRepositoryResult<Project> {
        let new_row = to_details_row(&details);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values((
                    &new_row,
                    projects::state.eq(ProjectState::Active.as_str()),
                ))
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            row_to_project(row)
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.load_where_state(None).await
    }

    async fn list_by_state(&self, state: ProjectState) -> ProjectRepositoryResult<Vec<Project>> {
        self.load_where_state(Some(state)).await
    }

    async fn update_details(
        &self,
        id: ProjectId,
        details: &ProjectDetails,
    ) -> ProjectRepositoryResult<()> {
        let changes = to_details_row(details);
        self.run_blocking(move |connection| {
            let updated = diesel::update(projects::table.filter(projects::id.eq(id.value())))
                .set(&changes)
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn update_state(
        &self,
        id: ProjectId,
        state: ProjectState,
    ) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(projects::table.filter(projects::id.eq(id.value())))
                .set(projects::state.eq(state.as_str()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_details_row(details: &ProjectDetails) -> ProjectDetailsRow {
    ProjectDetailsRow {
        name: details.name().to_owned(),
        description: details.description().to_owned(),
        manager_id: details.manager().value(),
        budget: details.budget().amount(),
        due_date: details.due_date(),
        genre: details.genre().to_owned(),
        platforms: details.platforms().to_owned(),
        engine: details.engine().to_owned(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        manager_id,
        budget: persisted_budget,
        due_date,
        genre,
        platforms,
        engine,
        state: persisted_state,
    } = row;

    let state = ProjectState::try_from(persisted_state.as_str())
        .map_err(ProjectRepositoryError::persistence)?;
    let budget = Budget::new(persisted_budget).map_err(ProjectRepositoryError::persistence)?;
    let mut details = ProjectDetails::new(name, UserId::new(manager_id))
        .map_err(ProjectRepositoryError::persistence)?
        .with_description(description)
        .with_budget(budget)
        .with_genre(genre)
        .with_platforms(platforms)
        .with_engine(engine);
    if let Some(due) = due_date {
        details = details.with_due_date(due);
    }

    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id),
        details,
        state,
    }))
}
