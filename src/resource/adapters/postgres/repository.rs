//! `PostgreSQL` repository implementation for resource records.

use super::{
    models::{NewResourceRow, ResourceRow},
    schema::resources,
};
use crate::project::domain::ProjectId;
use crate::resource::{
    domain::{PersistedResourceData, Resource, ResourceCategory, ResourceDraft, ResourceId},
    ports::{ResourceRepository, ResourceRepositoryError, ResourceRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by resource adapters.
pub type ResourcePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed resource repository.
#[derive(Debug, Clone)]
pub struct PostgresResourceRepository {
    pool: ResourcePgPool,
}

impl PostgresResourceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ResourcePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ResourceRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ResourceRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ResourceRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ResourceRepositoryError::persistence)?
    }
}

#[async_trait]
impl ResourceRepository for PostgresResourceRepository {
    async fn insert(&self, draft: ResourceDraft) -> ResourceRepositoryResult<Resource> {
        let new_row = NewResourceRow {
            name: draft.name,
            kind: draft.kind,
            locator: draft.locator,
            category: draft.category.as_str().to_owned(),
            project_id: draft.project.value(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(resources::table)
                .values(&new_row)
                .returning(ResourceRow::as_returning())
                .get_result::<ResourceRow>(connection)
                .map_err(ResourceRepositoryError::persistence)?;
            row_to_resource(row)
        })
        .await
    }

    async fn find_by_id(&self, id: ResourceId) -> ResourceRepositoryResult<Option<Resource>> {
        self.run_blocking(move |connection| {
            let row = resources::table
                .filter(resources::id.eq(id.value()))
                .select(ResourceRow::as_select())
                .first::<ResourceRow>(connection)
                .optional()
                .map_err(ResourceRepositoryError::persistence)?;
            row.map(row_to_resource).transpose()
        })
        .await
    }

    async fn list_for_project(
        &self,
        project: ProjectId,
    ) -> ResourceRepositoryResult<Vec<Resource>> {
        self.run_blocking(move |connection| {
            let rows = resources::table
                .filter(resources::project_id.eq(project.value()))
                .order(resources::id.asc())
                .select(ResourceRow::as_select())
                .load::<ResourceRow>(connection)
                .map_err(ResourceRepositoryError::persistence)?;
            rows.into_iter().map(row_to_resource).collect()
        })
        .await
    }

    async fn delete(&self, id: ResourceId) -> ResourceRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(resources::table.filter(resources::id.eq(id.value())))
                .execute(connection)
                .map_err(ResourceRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ResourceRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_resource(row: ResourceRow) -> ResourceRepositoryResult<Resource> {
    let ResourceRow {
        id,
        name,
        kind,
        locator,
        category: persisted_category,
        project_id,
    } = row;

    let category = ResourceCategory::try_from(persisted_category.as_str())
        .map_err(ResourceRepositoryError::persistence)?;

    Ok(Resource::from_persisted(PersistedResourceData {
        id: ResourceId::new(id),
        draft: ResourceDraft {
            name,
            kind,
            locator,
            category,
            project: ProjectId::new(project_id),
        },
    }))
}
