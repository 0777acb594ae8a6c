use super::*;

#[test]
fn patients_see_booking_links() {
    let paths: Vec<_> = nav_items(Role::Patient).iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["/", "/hospitals", "/my-bookings"]);
}

#[test]
fn admins_see_dashboard_link_only_for_admin_routes() {
    let paths: Vec<_> = nav_items(Role::HospitalAdmin).iter().map(|i| i.path).collect();
    assert!(paths.contains(&"/hospital-dashboard"));
    assert!(!paths.contains(&"/my-bookings"));
    assert!(!paths.contains(&"/"));
}

#[test]
fn users_without_role_get_no_links() {
    assert!(nav_items(Role::None).is_empty());
}

#[test]
fn active_link_matches_exact_path() {
    assert!(is_active("/hospitals", "/hospitals"));
    assert!(!is_active("/hospitals/1", "/hospitals"));
    assert!(!is_active("/", "/hospitals"));
}
