//! Application path table and static route classification.
//!
//! DESIGN
//! ======
//! Auth-exempt and role-setup pages are matched exactly. Role-restricted
//! routes are matched by plain string prefix so `/booking/abc123` falls under
//! `/booking`.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

pub const LOGIN: &str = "/login";
pub const SELECT_ROLE: &str = "/select-role";
pub const COMPLETE_PROFILE: &str = "/complete-profile";
pub const HOME: &str = "/";
pub const HOSPITALS: &str = "/hospitals";
pub const HOSPITAL: &str = "/hospital";
pub const MY_BOOKINGS: &str = "/my-bookings";
pub const BOOKING: &str = "/booking";
pub const HOSPITAL_DASHBOARD: &str = "/hospital-dashboard";
pub const HOSPITAL_ACCESS: &str = "/hospital-access";
pub const PATIENT_ACCESS_DENIED: &str = "/patient-access-denied";

const AUTH_EXEMPT: &[&str] = &[LOGIN];
const ROLE_SETUP_EXEMPT: &[&str] = &[SELECT_ROLE, COMPLETE_PROFILE];
const PATIENT_ONLY_PREFIXES: &[&str] = &[MY_BOOKINGS, BOOKING];
const HOSPITAL_ADMIN_ONLY_PREFIXES: &[&str] = &[HOSPITAL_DASHBOARD];

/// Static partition of the path space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    AuthExempt,
    RoleSetupExempt,
    PatientOnly,
    HospitalAdminOnly,
    /// Authenticated route with no role restriction.
    Protected,
}

#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if is_auth_exempt(path) {
        RouteClass::AuthExempt
    } else if is_role_setup(path) {
        RouteClass::RoleSetupExempt
    } else if is_patient_only(path) {
        RouteClass::PatientOnly
    } else if is_hospital_admin_only(path) {
        RouteClass::HospitalAdminOnly
    } else {
        RouteClass::Protected
    }
}

#[must_use]
pub fn is_auth_exempt(path: &str) -> bool {
    AUTH_EXEMPT.contains(&path)
}

#[must_use]
pub fn is_role_setup(path: &str) -> bool {
    ROLE_SETUP_EXEMPT.contains(&path)
}

#[must_use]
pub fn is_patient_only(path: &str) -> bool {
    PATIENT_ONLY_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

#[must_use]
pub fn is_hospital_admin_only(path: &str) -> bool {
    HOSPITAL_ADMIN_ONLY_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

#[must_use]
pub fn hospital_path(id: &str) -> String {
    format!("{HOSPITAL}/{id}")
}

#[must_use]
pub fn booking_path(id: &str) -> String {
    format!("{BOOKING}/{id}")
}
