use super::*;

#[test]
fn post_login_path_routes_by_role() {
    assert_eq!(post_login_path(Role::None), "/select-role");
    assert_eq!(post_login_path(Role::Patient), "/");
    assert_eq!(post_login_path(Role::HospitalAdmin), "/hospital-dashboard");
}

#[test]
fn validate_email_input_sanitizes_before_checking() {
    assert_eq!(validate_email_input("  Asha@Example.com "), Ok("asha@example.com".to_owned()));
}

#[test]
fn validate_email_input_rejects_malformed() {
    assert_eq!(validate_email_input("asha@"), Err("Please enter a valid email address"));
    assert_eq!(validate_email_input("   "), Err("Please enter a valid email address"));
}

#[test]
fn validate_otp_input_requires_six_digits() {
    assert_eq!(validate_otp_input(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_otp_input("12345"), Err("Please enter a valid 6-digit OTP"));
    assert_eq!(validate_otp_input("12a456"), Err("Please enter a valid 6-digit OTP"));
}

#[test]
fn countdown_ticks_down_to_zero_and_stays() {
    let mut remaining = RESEND_COOLDOWN_SECS;
    let mut ticks = 0;
    while remaining > 0 {
        remaining = tick_countdown(remaining);
        ticks += 1;
    }
    assert_eq!(ticks, 30);
    assert_eq!(tick_countdown(0), 0);
}

#[test]
fn resend_blocked_while_counting_or_busy() {
    assert!(!can_resend(RESEND_COOLDOWN_SECS, false));
    assert!(!can_resend(1, false));
    assert!(!can_resend(0, true));
    assert!(can_resend(0, false));
}

#[test]
fn resend_label_shows_remaining_seconds() {
    assert_eq!(resend_label(30), "Resend in 30s");
    assert_eq!(resend_label(1), "Resend in 1s");
    assert_eq!(resend_label(0), "Resend OTP");
}
