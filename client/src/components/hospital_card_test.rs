use super::*;
use crate::net::types::Rating;

#[test]
fn fee_label_formats_rupee_range() {
    assert_eq!(fee_label(&FeeRange { min: 200, max: 800 }), "₹200 - ₹800");
    assert_eq!(fee_label(&FeeRange::default()), "₹0 - ₹0");
}

#[test]
fn wait_label_reports_queue_and_minutes() {
    let hospital = Hospital { queue_length: 3, current_wait_time: 45, ..Hospital::default() };
    assert_eq!(wait_label(&hospital), "3 patients · ~45 min wait");
}

#[test]
fn rating_label_uses_one_decimal_and_default() {
    let rated = Hospital { rating: Some(Rating { average: 4.56, count: 8 }), ..Hospital::default() };
    assert_eq!(rating_label(&rated), "4.6");
    assert_eq!(rating_label(&Hospital::default()), "4.0");
}
