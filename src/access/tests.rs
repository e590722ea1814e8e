//! Unit tests for the capability table.

use super::{AccessDenied, Action, CapabilitySet, Role, authorize, require};
use rstest::rstest;

#[rstest]
#[case(Role::Manager, Action::ViewReports, true)]
#[case(Role::Manager, Action::ManageSettings, true)]
#[case(Role::Manager, Action::CreateProject, true)]
#[case(Role::Manager, Action::EditProject, true)]
#[case(Role::Manager, Action::ArchiveProject, true)]
#[case(Role::Manager, Action::CreateTask, true)]
#[case(Role::Manager, Action::EditTaskStatus, true)]
#[case(Role::Manager, Action::DeleteTask, true)]
#[case(Role::Manager, Action::DeleteResource, true)]
#[case(Role::Manager, Action::ViewProjectDetail, true)]
#[case(Role::InternalTeam, Action::ViewReports, true)]
#[case(Role::InternalTeam, Action::ManageSettings, true)]
#[case(Role::InternalTeam, Action::CreateProject, false)]
#[case(Role::InternalTeam, Action::EditProject, false)]
#[case(Role::InternalTeam, Action::ArchiveProject, false)]
#[case(Role::InternalTeam, Action::CreateTask, true)]
#[case(Role::InternalTeam, Action::EditTaskStatus, true)]
#[case(Role::InternalTeam, Action::DeleteTask, true)]
#[case(Role::InternalTeam, Action::DeleteResource, true)]
#[case(Role::InternalTeam, Action::ViewProjectDetail, true)]
#[case(Role::Freelancer, Action::ViewReports, false)]
#[case(Role::Freelancer, Action::ManageSettings, false)]
#[case(Role::Freelancer, Action::CreateProject, false)]
#[case(Role::Freelancer, Action::EditProject, false)]
#[case(Role::Freelancer, Action::ArchiveProject, false)]
#[case(Role::Freelancer, Action::CreateTask, false)]
#[case(Role::Freelancer, Action::EditTaskStatus, true)]
#[case(Role::Freelancer, Action::DeleteTask, false)]
#[case(Role::Freelancer, Action::DeleteResource, false)]
#[case(Role::Freelancer, Action::ViewProjectDetail, true)]
fn authorize_matches_static_table(
    #[case] role: Role,
    #[case] action: Action,
    #[case] expected: bool,
) {
    assert_eq!(authorize(role, action), expected);
}

#[test]
fn authorize_is_deterministic() {
    for role in Role::ALL {
        for action in Action::ALL {
            assert_eq!(authorize(role, action), authorize(role, action));
        }
    }
}

#[test]
fn manager_set_lists_every_action() {
    let actions: Vec<_> = CapabilitySet::for_role(Role::Manager).actions().collect();
    assert_eq!(actions, Action::ALL.to_vec());
}

#[test]
fn freelancer_set_lists_only_status_and_detail() {
    let actions: Vec<_> = CapabilitySet::for_role(Role::Freelancer)
        .actions()
        .collect();
    assert_eq!(
        actions,
        vec![Action::EditTaskStatus, Action::ViewProjectDetail]
    );
}

#[test]
fn require_reports_denial_without_leaking_capabilities() {
    let result = require(Role::Freelancer, Action::DeleteTask);
    assert_eq!(
        result,
        Err(AccessDenied {
            role: Role::Freelancer,
            action: Action::DeleteTask,
        })
    );
    let message = result.err().map(|err| err.to_string()).unwrap_or_default();
    assert_eq!(message, "action not permitted");
}

#[rstest]
#[case("Manager", Role::Manager)]
#[case("internal_team", Role::InternalTeam)]
#[case(" Freelancer ", Role::Freelancer)]
fn role_parses_literal_enumerators(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(Role::try_from(raw), Ok(expected));
}

#[rstest]
#[case("admin")]
#[case("")]
#[case("MANAGER")]
fn role_rejects_unknown_values(#[case] raw: &str) {
    assert!(Role::try_from(raw).is_err());
}
