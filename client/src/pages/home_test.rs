use super::*;

#[test]
fn greeting_follows_time_of_day() {
    assert_eq!(greeting(0), "Good Morning");
    assert_eq!(greeting(11), "Good Morning");
    assert_eq!(greeting(12), "Good Afternoon");
    assert_eq!(greeting(16), "Good Afternoon");
    assert_eq!(greeting(17), "Good Evening");
    assert_eq!(greeting(23), "Good Evening");
}

#[test]
fn display_name_uses_email_local_part() {
    assert_eq!(display_name(Some("asha@example.com")), "asha");
    assert_eq!(display_name(Some("@example.com")), "there");
    assert_eq!(display_name(None), "there");
}

#[test]
fn emergency_action_filters_hospitals() {
    let emergency = QUICK_ACTIONS.iter().find(|a| a.title == "Emergency").unwrap();
    assert_eq!(emergency.href, "/hospitals?emergency=true");
}
