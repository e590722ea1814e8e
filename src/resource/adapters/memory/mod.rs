//! In-memory adapters for resource persistence.

mod resource;

pub use resource::InMemoryResourceRepository;
