//! Port contracts for resource persistence.

mod repository;

pub use repository::{ResourceRepository, ResourceRepositoryError, ResourceRepositoryResult};
