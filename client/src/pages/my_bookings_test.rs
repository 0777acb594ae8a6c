use super::*;

#[test]
fn heading_pluralizes() {
    assert_eq!(bookings_heading(1), "1 Booking Found");
    assert_eq!(bookings_heading(3), "3 Bookings Found");
}

#[test]
fn status_class_varies_by_status() {
    assert_eq!(status_class(BookingStatus::Confirmed), "status status--confirmed");
    assert_eq!(status_class(BookingStatus::Cancelled), "status status--cancelled");
    assert_eq!(status_class(BookingStatus::Other), "status");
}

#[test]
fn cancellation_is_never_confirmed_off_browser() {
    assert!(!confirm_cancel());
}
