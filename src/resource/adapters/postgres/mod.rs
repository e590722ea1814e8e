//! `PostgreSQL` adapters for resource records.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresResourceRepository, ResourcePgPool};
