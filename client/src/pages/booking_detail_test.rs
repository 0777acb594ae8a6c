use super::*;
use crate::net::types::Hospital;

#[test]
fn share_text_includes_hospital_and_token() {
    let booking = Booking {
        token_number: Some(12),
        hospital: Some(Hospital { name: "Civil Hospital".to_owned(), ..Hospital::default() }),
        ..Booking::default()
    };
    assert_eq!(share_text(&booking), "Appointment at Civil Hospital - Token #12");
}

#[test]
fn share_text_without_token_or_hospital() {
    assert_eq!(share_text(&Booking::default()), "Appointment at hospital");
}
