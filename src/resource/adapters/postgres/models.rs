//! Diesel row models for resource records.

use super::schema::resources;
use diesel::prelude::*;

/// Query result row for resource records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = resources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResourceRow {
    /// Resource identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Kind label.
    pub kind: String,
    /// Content locator.
    pub locator: String,
    /// Page section.
    pub category: String,
    /// Parent project.
    pub project_id: i64,
}

/// Insert model for resource records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = resources)]
pub struct NewResourceRow {
    /// Display name.
    pub name: String,
    /// Kind label.
    pub kind: String,
    /// Content locator.
    pub locator: String,
    /// Page section.
    pub category: String,
    /// Parent project.
    pub project_id: i64,
}
