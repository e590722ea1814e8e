//! Lifecycle events that trigger a notification.

use super::Notification;
use crate::identity::domain::EmailAddress;
use crate::task::domain::TaskStatus;
use chrono::NaiveDate;

/// Event emitted after a lifecycle action has committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A manager was given a newly created project.
    ProjectAssigned {
        /// Address of the assigned manager.
        manager: EmailAddress,
        /// Name of the project.
        project_name: String,
    },
    /// A collaborator was given a newly created task.
    TaskAssigned {
        /// Address of the assignee.
        assignee: EmailAddress,
        /// Task title.
        title: String,
        /// Name of the parent project.
        project_name: String,
        /// Status the task was created with.
        status: TaskStatus,
        /// Due date, if any.
        due_date: Option<NaiveDate>,
    },
    /// Somebody asked to recover access for a known address.
    AccessRecoveryRequested {
        /// Address the request was made for.
        email: EmailAddress,
    },
}

impl LifecycleEvent {
    /// Returns the address the event is delivered to.
    #[must_use]
    pub const fn recipient(&self) -> &EmailAddress {
        match self {
            Self::ProjectAssigned { manager, .. } => manager,
            Self::TaskAssigned { assignee, .. } => assignee,
            Self::AccessRecoveryRequested { email } => email,
        }
    }

    /// Composes the human-readable notification for this event.
    #[must_use]
    pub fn to_notification(&self) -> Notification {
        match self {
            Self::ProjectAssigned {
                manager,
                project_name,
            } => Notification::new(
                manager.clone(),
                "New project assigned",
                format!("You have been assigned as manager of the project \"{project_name}\"."),
            ),
            Self::TaskAssigned {
                assignee,
                title,
                project_name,
                status,
                due_date,
            } => {
                let due = due_date.map_or_else(
                    || "No due date".to_owned(),
                    |date| date.format("%d/%m/%Y").to_string(),
                );
                let body = format!(
                    "You have been given a new responsibility in the tracker.\n\
                     \n\
                     Task details:\n\
                     - Title: {title}\n\
                     - Project: {project_name}\n\
                     - Initial status: {status}\n\
                     - Due date: {due}\n\
                     \n\
                     Please sign in to manage your progress.",
                    status = status.as_str(),
                );
                Notification::new(assignee.clone(), format!("New task assigned: {title}"), body)
            }
            Self::AccessRecoveryRequested { email } => Notification::new(
                email.clone(),
                "Access recovery",
                "We received a request to recover your access to the tracker.\n\
                 Passwords are never sent by email.\n\
                 Next steps:\n\
                 1. Contact the system administrator (studio management).\n\
                 2. Ask for a manual credential reset.\n\
                 If you did not make this request, please report it.",
            ),
        }
    }
}
