use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_booking(status: BookingStatus) -> Booking {
    Booking { id: "b".to_owned(), status, ..Booking::default() }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "role": "PATIENT",
        "isProfileComplete": true
    }))
    .unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.role, Role::Patient);
    assert!(user.is_profile_complete);
    assert!(user.extra.is_empty());
}

#[test]
fn user_tolerates_missing_and_null_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "email": "a@b.com",
        "role": null,
        "isProfileComplete": null
    }))
    .unwrap();
    assert_eq!(user.role, Role::None);
    assert!(!user.is_profile_complete);

    let bare: User = serde_json::from_str("{}").unwrap();
    assert_eq!(bare, User::default());
}

#[test]
fn user_unknown_role_becomes_none() {
    let user: User = serde_json::from_str(r#"{"role":"DOCTOR"}"#).unwrap();
    assert_eq!(user.role, Role::None);
}

#[test]
fn user_preserves_unknown_fields_through_persistence() {
    let raw = serde_json::json!({
        "email": "a@b.com",
        "role": "HOSPITAL_ADMIN",
        "isProfileComplete": false,
        "phone": "9876543210"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.extra.get("phone"), Some(&serde_json::json!("9876543210")));

    let encoded = serde_json::to_value(&user).unwrap();
    assert_eq!(encoded["phone"], "9876543210");
    assert_eq!(encoded["role"], "HOSPITAL_ADMIN");
    assert_eq!(encoded["isProfileComplete"], false);
}

#[test]
fn user_apply_merges_only_present_fields() {
    let mut user = User { email: Some("a@b.com".to_owned()), role: Role::Patient, ..User::default() };
    user.apply(UserUpdate { is_profile_complete: Some(true), ..UserUpdate::default() });
    assert!(user.is_profile_complete);
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

// =============================================================
// Envelope and entities
// =============================================================

#[test]
fn envelope_decodes_success_and_failure() {
    let ok: ApiEnvelope<Vec<Specialty>> =
        serde_json::from_str(r#"{"success":true,"data":[{"_id":"s1","name":"Cardiology"}]}"#).unwrap();
    assert!(ok.success);
    assert_eq!(ok.data.unwrap()[0].name, "Cardiology");

    let failed: ApiEnvelope<Vec<Specialty>> =
        serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
    assert!(!failed.success);
    assert!(failed.data.is_none());
    assert_eq!(failed.message.as_deref(), Some("nope"));
}

#[test]
fn hospital_decodes_with_partial_data() {
    let hospital: Hospital = serde_json::from_value(serde_json::json!({
        "_id": "h1",
        "name": "City Care",
        "location": {"address": "Ring Road", "coordinates": [70.8, 22.3]},
        "opdHours": {"start": "8:00", "end": "18:00"},
        "facilities": ["ICU", "Pharmacy"],
        "specialties": ["Cardiology", {"name": "Neurology"}, 3],
        "queueLength": 4
    }))
    .unwrap();
    assert_eq!(hospital.id, "h1");
    assert_eq!(hospital.address(), "Ring Road");
    assert!(!hospital.is_emergency());
    assert_eq!(hospital.specialty_names(), vec!["Cardiology".to_owned(), "Neurology".to_owned()]);
    assert_eq!(hospital.queue_length, 4);
    assert_eq!(hospital.opd_hours.unwrap().start, "8:00");
}

#[test]
fn hospital_without_location_has_empty_address() {
    let hospital = Hospital { name: "X".to_owned(), ..Hospital::default() };
    assert_eq!(hospital.address(), "");
}

#[test]
fn booking_populated_references_decode_and_bare_ids_do_not() {
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "_id": "b1",
        "status": "confirmed",
        "tokenNumber": 12,
        "hospital": {"_id": "h1", "name": "City Care"},
        "slot": "slot-id-only",
        "patientProfile": {"fullName": "Asha Patel"}
    }))
    .unwrap();
    assert_eq!(booking.hospital.as_ref().map(|h| h.name.as_str()), Some("City Care"));
    assert!(booking.slot.is_none());
    assert_eq!(booking.token_number, Some(12));
    assert_eq!(booking.patient_name(), Some("Asha Patel"));
    assert!(booking.is_cancellable());
}

#[test]
fn booking_status_unknown_maps_to_other() {
    let booking: Booking = serde_json::from_str(r#"{"_id":"b","status":"no-show"}"#).unwrap();
    assert_eq!(booking.status, BookingStatus::Other);
    assert!(!booking.is_cancellable());
}

#[test]
fn slot_bookability() {
    let full = Slot { available_count: 0, ..Slot::default() };
    let unlimited = Slot { available_count: 0, is_unlimited: true, ..Slot::default() };
    let open = Slot { available_count: 3, ..Slot::default() };
    assert!(!full.is_bookable());
    assert!(unlimited.is_bookable());
    assert!(open.is_bookable());
}

// =============================================================
// Dashboard stats
// =============================================================

#[test]
fn booking_stats_count_by_status() {
    let bookings = vec![
        make_booking(BookingStatus::Confirmed),
        make_booking(BookingStatus::Confirmed),
        make_booking(BookingStatus::Completed),
        make_booking(BookingStatus::Cancelled),
        make_booking(BookingStatus::Other),
    ];
    let stats = BookingStats::from_bookings(&bookings);
    assert_eq!(stats, BookingStats { total: 5, confirmed: 2, completed: 1, cancelled: 1 });
}

#[test]
fn queue_update_uses_fifteen_minutes_per_confirmed_patient() {
    let stats = BookingStats { total: 4, confirmed: 3, completed: 1, cancelled: 0 };
    assert_eq!(stats.queue_update(), QueueUpdate { queue_length: 3, current_wait_time: 45 });
    assert_eq!(
        serde_json::to_value(stats.queue_update()).unwrap(),
        serde_json::json!({"queueLength": 3, "currentWaitTime": 45})
    );
}

#[test]
fn hospital_query_pairs_skip_empty_filters() {
    let query = HospitalQuery { specialty: Some(String::new()), emergency: true, search: Some("city".to_owned()) };
    assert_eq!(query.to_pairs(), vec![("emergency", "true".to_owned()), ("search", "city".to_owned())]);
    assert!(HospitalQuery::default().to_pairs().is_empty());
}

#[test]
fn new_patient_profile_encodes_camel_case() {
    let profile = NewPatientProfile {
        full_name: "Asha Patel".to_owned(),
        date_of_birth: "1990-04-12".to_owned(),
        gender: Gender::Female,
        contact_number: Some("9876543210".to_owned()),
        emergency_contact: None,
    };
    assert_eq!(
        serde_json::to_value(&profile).unwrap(),
        serde_json::json!({
            "fullName": "Asha Patel",
            "dateOfBirth": "1990-04-12",
            "gender": "Female",
            "contactNumber": "9876543210"
        })
    );
}

#[test]
fn hospital_rating_object_and_display_defaults() {
    let rated: Hospital = serde_json::from_value(serde_json::json!({
        "_id": "h1",
        "name": "Civil Hospital",
        "rating": { "average": 4.6, "count": 120 }
    }))
    .unwrap();
    assert_eq!(rated.average_rating(), 4.6);
    assert_eq!(rated.rating.map(|r| r.count), Some(120));

    let unrated: Hospital = serde_json::from_value(serde_json::json!({ "name": "Sterling", "rating": 3 })).unwrap();
    assert_eq!(unrated.average_rating(), 4.0);
    assert_eq!(unrated.fee_range(), FeeRange::default());
    assert_eq!(unrated.opd_hours().start, "9:00");
}

#[test]
fn new_booking_carries_walk_in_details() {
    let booking = NewBooking {
        slot_id: "s1".to_owned(),
        user: WalkInPatient { name: "Ravi".to_owned(), phone: "9876543210".to_owned(), age: None, gender: Gender::Male },
        symptoms: Some("Fever".to_owned()),
    };
    assert_eq!(
        serde_json::to_value(&booking).unwrap(),
        serde_json::json!({
            "slotId": "s1",
            "user": { "name": "Ravi", "phone": "9876543210", "gender": "Male" },
            "symptoms": "Fever"
        })
    );
}

#[test]
fn gender_label_round_trips() {
    for gender in Gender::ALL {
        assert_eq!(Gender::from_label(gender.label()), Some(gender));
    }
    assert_eq!(Gender::from_label("male"), None);
}
