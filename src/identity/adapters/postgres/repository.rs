//! `PostgreSQL` repository implementation for the user directory.

use super::{models::UserRow, schema::users};
use crate::access::Role;
use crate::identity::{
    domain::{Credential, EmailAddress, PersistedUserData, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by identity adapters.
pub type IdentityPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: IdentityPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IdentityPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            // Rows written before addresses were normalised may be mixed case.
            let row = diesel::sql_query(concat!(
                "SELECT id, name, role, email, credential FROM users ",
                "WHERE lower(email) = $1 ",
                "LIMIT 1",
            ))
            .bind::<diesel::sql_types::Text, _>(lookup)
            .get_result::<UserRow>(connection)
            .optional()
            .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.value()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn update_credential(
        &self,
        id: UserId,
        credential: &Credential,
    ) -> UserRepositoryResult<()> {
        let stored = credential.as_stored().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(users::table.filter(users::id.eq(id.value())))
                .set(users::credential.eq(stored))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if updated == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        name,
        role: persisted_role,
        email: persisted_email,
        credential,
    } = row;

    let role = Role::try_from(persisted_role.as_str()).map_err(UserRepositoryError::persistence)?;
    let email = EmailAddress::new(persisted_email).map_err(UserRepositoryError::persistence)?;

    Ok(User::from_persisted(PersistedUserData {
        id: UserId::new(id),
        name,
        role,
        email,
        credential: Credential::from_stored(credential),
    }))
}
