//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Assigned user.
    pub assignee_id: i64,
    /// Parent project.
    pub project_id: i64,
    /// Calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Status storage value.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Assigned user.
    pub assignee_id: i64,
    /// Parent project.
    pub project_id: i64,
    /// Calendar due date.
    pub due_date: Option<NaiveDate>,
    /// Status storage value.
    pub status: String,
}
