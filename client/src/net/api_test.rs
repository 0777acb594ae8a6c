use super::*;

#[test]
fn default_bases_point_at_local_api() {
    assert_eq!(DEFAULT_API_URL, "http://localhost:5000/api");
    assert_eq!(DEFAULT_AUTH_URL, "http://localhost:5000/auth");
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://x/api/", "/hospitals"), "http://x/api/hospitals");
    assert_eq!(join_url("http://x/api", "hospitals"), "http://x/api/hospitals");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(hospital_endpoint("h1"), "/hospitals/h1");
    assert_eq!(hospital_queue_endpoint("h1"), "/hospitals/h1/queue");
    assert_eq!(slot_endpoint("s1"), "/slots/s1");
    assert_eq!(slot_action_endpoint("s1", "toggle"), "/slots/s1/toggle");
    assert_eq!(hospital_slots_endpoint("h1"), "/slots/hospital/h1");
    assert_eq!(booking_endpoint("b1"), "/bookings/b1");
    assert_eq!(booking_cancel_endpoint("b1"), "/bookings/b1/cancel");
    assert_eq!(hospital_bookings_endpoint("h1"), "/bookings/hospital/h1");
}

#[test]
fn free_text_segments_are_percent_encoded() {
    assert_eq!(symptom_search_endpoint("chest pain"), "/specialties/search-symptom/chest%20pain");
    assert_eq!(hospital_search_endpoint("a/b"), "/hospitals/search/a%2Fb");
}

#[test]
fn date_query_skips_missing_or_empty_date() {
    assert!(date_query(None).is_empty());
    assert!(date_query(Some("")).is_empty());
    assert_eq!(date_query(Some("2024-08-15")), vec![("date", "2024-08-15".to_owned())]);
}

#[test]
fn body_message_extracts_server_message() {
    assert_eq!(body_message(r#"{"message":"Slot full"}"#), Some("Slot full".to_owned()));
    assert_eq!(body_message(r#"{"message":""}"#), None);
    assert_eq!(body_message("<html>"), None);
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}

#[test]
fn auth_error_message_prefers_server_text_where_allowed() {
    assert_eq!(auth_error_message(400, Some("Email required")), "Email required");
    assert_eq!(auth_error_message(400, None), "Invalid request. Please check your input.");
    assert_eq!(auth_error_message(401, None), "Invalid OTP. Please try again.");
    assert_eq!(auth_error_message(404, None), "Service not found.");
    assert_eq!(auth_error_message(418, None), "Something went wrong. Please try again.");
}

#[test]
fn auth_error_message_fixed_text_for_throttle_and_server_errors() {
    assert_eq!(auth_error_message(429, Some("slow down")), "Too many attempts. Please try again later.");
    assert_eq!(auth_error_message(500, Some("stack trace")), "Server error. Please try again later.");
}

#[test]
fn into_data_unwraps_successful_envelope() {
    let envelope = ApiEnvelope { success: true, data: Some(5), message: None };
    assert_eq!(into_data(envelope), Ok(5));
}

#[test]
fn into_data_rejects_unsuccessful_envelope() {
    let envelope: ApiEnvelope<u8> = ApiEnvelope { success: false, data: None, message: Some("Slot closed".to_owned()) };
    assert_eq!(into_data(envelope), Err(ApiError::Rejected("Slot closed".to_owned())));
}

#[test]
fn into_data_requires_payload() {
    let envelope: ApiEnvelope<u8> = ApiEnvelope { success: true, data: None, message: None };
    assert!(matches!(into_data(envelope), Err(ApiError::Decode(_))));
}

#[test]
fn into_ack_ignores_payload() {
    let envelope = ApiEnvelope { success: true, data: None, message: None };
    assert_eq!(into_ack(envelope), Ok(()));
}

#[test]
fn api_error_display_is_user_facing() {
    assert_eq!(
        ApiError::Network("dns".to_owned()).to_string(),
        "Network error. Please check your connection and try again."
    );
    assert_eq!(ApiError::Status { status: 400, message: "Bad slot".to_owned() }.to_string(), "Bad slot");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let result = block_on_ready(list_specialties());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}

// =============================================================
// Request shapes
// =============================================================

fn owned(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect()
}

fn assert_shape(request: &ApiRequest, method: Method, path: &str) {
    assert_eq!(request.method, method, "{request:?}");
    assert_eq!(request.path, path, "{request:?}");
}

fn sample_slot() -> NewSlot {
    NewSlot {
        hospital_id: "h1".to_owned(),
        date: "2024-08-15".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "10:00".to_owned(),
        capacity: 12,
        is_unlimited: false,
    }
}

#[test]
fn hospital_requests() {
    let query = HospitalQuery { specialty: Some("Cardiology".to_owned()), emergency: true, search: None };
    let list = list_hospitals_request(&query);
    assert_shape(&list, Method::Get, "/hospitals");
    assert_eq!(list.query, owned(&[("specialty", "Cardiology"), ("emergency", "true")]));
    assert_eq!(list.body, None);

    assert_shape(&get_hospital_request("h1"), Method::Get, "/hospitals/h1");

    let search = search_hospitals_request("city care");
    assert_shape(&search, Method::Get, "/hospitals/search/city%20care");
    assert!(search.query.is_empty());
}

#[test]
fn update_queue_request_patches_camel_case_body() {
    let update = QueueUpdate { queue_length: 4, current_wait_time: 60 };
    let request = update_queue_request("h1", &update).unwrap();
    assert_shape(&request, Method::Patch, "/hospitals/h1/queue");
    assert_eq!(request.body, Some(serde_json::json!({ "queueLength": 4, "currentWaitTime": 60 })));
}

#[test]
fn specialty_requests() {
    assert_shape(&list_specialties_request(), Method::Get, "/specialties");
    assert_shape(&search_specialties_request("chest pain"), Method::Get, "/specialties/search-symptom/chest%20pain");
}

#[test]
fn slot_list_requests_carry_hospital_and_date() {
    let list = list_slots_request("h1", Some("2024-08-15"));
    assert_shape(&list, Method::Get, "/slots");
    assert_eq!(list.query, owned(&[("hospitalId", "h1"), ("date", "2024-08-15")]));
    assert_eq!(list_slots_request("h1", None).query, owned(&[("hospitalId", "h1")]));

    let by_hospital = list_hospital_slots_request("h1", Some("2024-08-15"));
    assert_shape(&by_hospital, Method::Get, "/slots/hospital/h1");
    assert_eq!(by_hospital.query, owned(&[("date", "2024-08-15")]));
    assert!(list_hospital_slots_request("h1", Some("")).query.is_empty());
}

#[test]
fn slot_item_requests() {
    assert_shape(&get_slot_request("s1"), Method::Get, "/slots/s1");
    assert_shape(&delete_slot_request("s1"), Method::Delete, "/slots/s1");
    assert_shape(&toggle_slot_request("s1"), Method::Patch, "/slots/s1/toggle");
    assert_shape(&close_slot_request("s1"), Method::Patch, "/slots/s1/close");
    assert_eq!(delete_slot_request("s1").body, None);
}

#[test]
fn slot_write_requests_send_slot_body() {
    let expected = serde_json::json!({
        "hospitalId": "h1",
        "date": "2024-08-15",
        "startTime": "09:00",
        "endTime": "10:00",
        "capacity": 12,
        "isUnlimited": false,
    });
    let create = create_slot_request(&sample_slot()).unwrap();
    assert_shape(&create, Method::Post, "/slots");
    assert_eq!(create.body, Some(expected.clone()));

    let update = update_slot_request("s1", &sample_slot()).unwrap();
    assert_shape(&update, Method::Put, "/slots/s1");
    assert_eq!(update.body, Some(expected));
}

#[test]
fn booking_requests() {
    let booking = NewBooking {
        slot_id: "s1".to_owned(),
        user: crate::net::types::WalkInPatient {
            name: "Asha".to_owned(),
            phone: "9876543210".to_owned(),
            age: None,
            gender: crate::net::types::Gender::Female,
        },
        symptoms: None,
    };
    let create = create_booking_request(&booking).unwrap();
    assert_shape(&create, Method::Post, "/bookings");
    assert_eq!(
        create.body,
        Some(serde_json::json!({
            "slotId": "s1",
            "user": { "name": "Asha", "phone": "9876543210", "gender": "Female" },
        }))
    );

    assert_shape(&my_bookings_request(), Method::Get, "/bookings/me");
    assert_shape(&get_booking_request("b1"), Method::Get, "/bookings/b1");
    assert_shape(&cancel_booking_request("b1"), Method::Patch, "/bookings/b1/cancel");

    let by_hospital = hospital_bookings_request("h1", Some("2024-08-15"));
    assert_shape(&by_hospital, Method::Get, "/bookings/hospital/h1");
    assert_eq!(by_hospital.query, owned(&[("date", "2024-08-15")]));
}

#[test]
fn user_requests() {
    let set_role = set_role_request(Role::HospitalAdmin).unwrap();
    assert_shape(&set_role, Method::Post, "/users/set-role");
    assert_eq!(set_role.body, Some(serde_json::json!({ "role": "HOSPITAL_ADMIN" })));

    assert_shape(&current_user_request(), Method::Get, "/users/me");
}

#[test]
fn patient_profile_requests() {
    let profile = NewPatientProfile {
        full_name: "Asha Rao".to_owned(),
        date_of_birth: "1990-04-02".to_owned(),
        gender: crate::net::types::Gender::Female,
        contact_number: None,
        emergency_contact: None,
    };
    let create = create_patient_profile_request(&profile).unwrap();
    assert_shape(&create, Method::Post, "/patient-profiles");
    assert_eq!(
        create.body,
        Some(serde_json::json!({ "fullName": "Asha Rao", "dateOfBirth": "1990-04-02", "gender": "Female" }))
    );

    assert_shape(&my_patient_profile_request(), Method::Get, "/patient-profiles/me");

    let update = PatientProfileUpdate { contact_number: Some("9876543210".to_owned()), ..PatientProfileUpdate::default() };
    let patch = update_patient_profile_request(&update).unwrap();
    assert_shape(&patch, Method::Patch, "/patient-profiles/me");
    assert_eq!(patch.body, Some(serde_json::json!({ "contactNumber": "9876543210" })));
}

#[test]
fn health_check_request_is_bare_get() {
    let request = health_check_request();
    assert_shape(&request, Method::Get, "/health");
    assert!(request.query.is_empty());
    assert_eq!(request.body, None);
}
