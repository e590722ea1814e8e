//! Action classes checked by the capability gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of action a user may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read report and KPI figures.
    ViewReports,
    /// Change user-facing settings such as the display theme.
    ManageSettings,
    /// Create a new project.
    CreateProject,
    /// Replace the editable fields of a project.
    EditProject,
    /// Move a project from active to archived.
    ArchiveProject,
    /// Create a task inside an active project.
    CreateTask,
    /// Advance the status of a task.
    EditTaskStatus,
    /// Delete a task.
    DeleteTask,
    /// Delete a project resource.
    DeleteResource,
    /// Read the full detail view of a project.
    ViewProjectDetail,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ViewReports,
        Self::ManageSettings,
        Self::CreateProject,
        Self::EditProject,
        Self::ArchiveProject,
        Self::CreateTask,
        Self::EditTaskStatus,
        Self::DeleteTask,
        Self::DeleteResource,
        Self::ViewProjectDetail,
    ];

    /// Returns the canonical action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewReports => "view_reports",
            Self::ManageSettings => "manage_settings",
            Self::CreateProject => "create_project",
            Self::EditProject => "edit_project",
            Self::ArchiveProject => "archive_project",
            Self::CreateTask => "create_task",
            Self::EditTaskStatus => "edit_task_status",
            Self::DeleteTask => "delete_task",
            Self::DeleteResource => "delete_resource",
            Self::ViewProjectDetail => "view_project_detail",
        }
    }

    pub(super) const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
