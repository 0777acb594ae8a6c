use super::*;

fn user(role: Role, complete: bool) -> User {
    User { role, is_profile_complete: complete, ..User::default() }
}

#[test]
fn patient_with_profile_goes_home() {
    assert_eq!(role_landing(&user(Role::Patient, true)), "/");
}

#[test]
fn patient_without_profile_completes_it_first() {
    assert_eq!(role_landing(&user(Role::Patient, false)), "/complete-profile");
}

#[test]
fn admin_goes_to_dashboard_regardless_of_profile() {
    assert_eq!(role_landing(&user(Role::HospitalAdmin, false)), "/hospital-dashboard");
}

#[test]
fn missing_role_stays_on_selection() {
    assert_eq!(role_landing(&user(Role::None, true)), "/select-role");
}

#[test]
fn offered_roles_exclude_none() {
    assert!(ROLE_OPTIONS.iter().all(|o| !o.role.is_none()));
}
