//! Domain model for project resources.

mod error;
mod ids;
mod resource;

pub use error::{ParseResourceCategoryError, ResourceDomainError};
pub use ids::ResourceId;
pub use resource::{
    LINK_ONLY_LOCATOR, PersistedResourceData, Resource, ResourceCategory, ResourceDraft,
};
