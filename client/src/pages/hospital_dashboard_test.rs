use super::*;

#[test]
fn parse_count_defaults_to_zero() {
    assert_eq!(parse_count("12"), 12);
    assert_eq!(parse_count(" 3 "), 3);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("-4"), 0);
    assert_eq!(parse_count("ten"), 0);
}

#[test]
fn stat_cards_list_counts_in_display_order() {
    let stats = BookingStats { total: 9, confirmed: 4, completed: 3, cancelled: 2 };
    assert_eq!(
        stat_cards(&stats),
        [("Total Bookings", 9), ("Confirmed", 4), ("Completed", 3), ("Cancelled", 2)]
    );
}

#[test]
fn only_latest_request_is_applied() {
    // Hospital picked (seq 1), then date changed (seq 2) before the first reply.
    let first = 1;
    let latest = 2;
    assert!(!is_current_request(latest, first));
    assert!(is_current_request(latest, latest));
}
