//! Read models returned by the coordinator.

use crate::project::domain::Project;
use crate::resource::domain::Resource;
use crate::risk::RiskTier;
use crate::task::domain::Task;
use serde::Serialize;

/// A task paired with its current deadline risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessedTask {
    /// The task.
    pub task: Task,
    /// Risk computed at read time.
    pub risk: RiskTier,
}

/// Everything shown on a project's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    /// The project.
    pub project: Project,
    /// Project deadline badge.
    pub risk: RiskTier,
    /// Tasks of the project with their badges.
    pub tasks: Vec<AssessedTask>,
    /// Documentation resources.
    pub documentation: Vec<Resource>,
    /// Deliverable resources.
    pub deliverables: Vec<Resource>,
}
