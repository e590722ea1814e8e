//! Static role-to-capability table.

use super::{Action, Role};
use thiserror::Error;

/// Set of actions granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u16);

const MANAGER: CapabilitySet = CapabilitySet::of(&Action::ALL);

const INTERNAL_TEAM: CapabilitySet = CapabilitySet::of(&[
    Action::ViewReports,
    Action::ManageSettings,
    Action::CreateTask,
    Action::EditTaskStatus,
    Action::DeleteTask,
    Action::DeleteResource,
    Action::ViewProjectDetail,
]);

const FREELANCER: CapabilitySet =
    CapabilitySet::of(&[Action::EditTaskStatus, Action::ViewProjectDetail]);

impl CapabilitySet {
    /// Builds a set from a list of actions.
    #[must_use]
    pub const fn of(actions: &[Action]) -> Self {
        let mut mask = 0;
        let mut remaining = actions;
        while let [first, rest @ ..] = remaining {
            mask |= first.bit();
            remaining = rest;
        }
        Self(mask)
    }

    /// Returns the capabilities granted to `role`.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Manager => MANAGER,
            Role::InternalTeam => INTERNAL_TEAM,
            Role::Freelancer => FREELANCER,
        }
    }

    /// Returns whether `action` is in the set.
    #[must_use]
    pub const fn permits(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    /// Iterates over the permitted actions in declaration order.
    pub fn actions(self) -> impl Iterator<Item = Action> {
        Action::ALL
            .into_iter()
            .filter(move |action| self.permits(*action))
    }
}

/// Returns whether `role` may perform `action`.
///
/// This is a pure table lookup with no side effects.
#[must_use]
pub const fn authorize(role: Role, action: Action) -> bool {
    CapabilitySet::for_role(role).permits(action)
}

/// Checks `action` for `role`, producing an error the caller can surface.
///
/// # Errors
///
/// Returns [`AccessDenied`] when the role lacks the capability.
pub fn require(role: Role, action: Action) -> Result<(), AccessDenied> {
    if authorize(role, action) {
        return Ok(());
    }
    tracing::warn!(%role, %action, "capability check denied");
    Err(AccessDenied { role, action })
}

/// Error returned when a role lacks the capability for an action.
///
/// The display text never names the permitted actions; the role and action
/// fields are for server-side logs.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("action not permitted")]
pub struct AccessDenied {
    /// Role of the acting user.
    pub role: Role,
    /// Action that was refused.
    pub action: Action,
}
