//! Dashboard and report figures.
//!
//! Every figure is computed on read from the project and task stores; nothing
//! is cached. Task badges come from the same [`crate::risk::RiskClassifier`]
//! the lifecycle read paths use, so a task shows one tier everywhere.

mod error;
mod figures;
mod service;

pub use error::{ReportingError, ReportingResult};
pub use figures::{Dashboard, Kpis, ProjectProgress, ProjectStatusSummary, StatusCounts, percentage};
pub use service::ReportingService;

#[cfg(test)]
mod tests;
