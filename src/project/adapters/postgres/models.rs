//! Diesel row models for project persistence.

use super::schema::projects;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: i64,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Managing user.
    pub manager_id: i64,
    /// Whole budget amount.
    pub budget: i64,
    /// Calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Genre label.
    pub genre: String,
    /// Target platforms label.
    pub platforms: String,
    /// Engine label.
    pub engine: String,
    /// Lifecycle state.
    pub state: String,
}

/// Editable columns, used for both inserts and full-record updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectDetailsRow {
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Managing user.
    pub manager_id: i64,
    /// Whole budget amount.
    pub budget: i64,
    /// Calendar due date.
    #[diesel(treat_none_as_null = true)]
    pub due_date: Option<NaiveDate>,
    /// Genre label.
    pub genre: String,
    /// Target platforms label.
    pub platforms: String,
    /// Engine label.
    pub engine: String,
}
