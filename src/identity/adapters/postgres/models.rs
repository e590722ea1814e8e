//! Diesel row models for the user directory.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
    /// Display name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Role enumerator.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub role: String,
    /// Contact address.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
    /// Stored credential record.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub credential: String,
}
