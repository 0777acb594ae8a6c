//! REST API helpers for the external booking service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! AUTHORIZATION
//! =============
//! Booking API requests carry the stored bearer token. A `401` from the
//! booking API is an implicit logout: both session keys are cleared and the
//! browser is sent to `/login` with a history-replacing navigation. The OTP
//! auth endpoints are exempt, since a `401` there only means a wrong code.
//!
//! REQUESTS
//! ========
//! Each endpoint first builds a plain `ApiRequest` (method, path, query,
//! JSON body); the async wrapper only hands it to the transport. Request
//! shapes are therefore testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; `ApiError`'s display text
//! is safe to show in the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    ApiEnvelope, AuthResponse, Booking, Hospital, HospitalQuery, NewBooking, NewPatientProfile, NewSlot,
    OtpResponse, PatientProfile, PatientProfileUpdate, QueueUpdate, Role, Slot, Specialty, User,
};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:5000/auth";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error. Please check your connection and try again.")]
    Network(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Base URL of the booking API, fixed at build time by `HABS_API_URL`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("HABS_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Base URL of the OTP auth service, fixed at build time by `HABS_AUTH_URL`.
#[must_use]
pub fn auth_base() -> &'static str {
    option_env!("HABS_AUTH_URL").unwrap_or(DEFAULT_AUTH_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull `message` out of an error body, if the server sent one.
#[cfg(any(test, feature = "hydrate"))]
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

/// User-facing message for a failed auth-service call.
#[cfg(any(test, feature = "hydrate"))]
fn auth_error_message(status: u16, server_message: Option<&str>) -> String {
    let fallback = |default: &str| server_message.unwrap_or(default).to_owned();
    match status {
        400 => fallback("Invalid request. Please check your input."),
        401 => fallback("Invalid OTP. Please try again."),
        404 => fallback("Service not found."),
        429 => "Too many attempts. Please try again later.".to_owned(),
        500 => "Server error. Please try again later.".to_owned(),
        _ => fallback("Something went wrong. Please try again."),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Unwrap the `{ success, data, message }` envelope.
fn into_data<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(ApiError::Rejected(
            envelope.message.unwrap_or_else(|| "request failed".to_owned()),
        ));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("missing data".to_owned()))
}

/// Like [`into_data`] for calls whose payload the client does not need.
fn into_ack(envelope: ApiEnvelope<serde_json::Value>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            envelope.message.unwrap_or_else(|| "request failed".to_owned()),
        ))
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// One booking-API call, fully described before anything is sent.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq)]
struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }
}

#[cfg(feature = "hydrate")]
fn builder(method: Method, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

/// Drop the stored session and leave for `/login` without a history entry.
#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    use crate::state::auth::AuthState;
    use crate::util::storage::BrowserStorage;

    log::warn!("booking api returned 401; clearing session");
    AuthState::clear_persisted(&BrowserStorage);
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(crate::routing::paths::LOGIN);
    }
}

/// Send an authenticated booking-API request and decode the envelope.
async fn call<T: DeserializeOwned>(request: ApiRequest) -> Result<ApiEnvelope<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::TOKEN_KEY;
        use crate::util::storage::{BrowserStorage, KeyValueStore};

        let url = join_url(api_base(), &request.path);
        let mut req = builder(request.method, &url).query(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        if let Some(token) = BrowserStorage.get(TOKEN_KEY) {
            req = req.header("Authorization", &bearer(&token));
        }
        let req = match &request.body {
            Some(body) => req.json(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            None => req.build().map_err(|e| ApiError::Decode(e.to_string()))?,
        };
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if status == 401 {
            handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let message = body_message(&text).unwrap_or_else(|| request_failed_message(status));
            return Err(ApiError::Status { status, message });
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Send an unauthenticated auth-service request; the body is not enveloped.
async fn call_auth<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let url = join_url(auth_base(), path);
        let req = builder(Method::Post, &url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req.send().await.map_err(|e| {
            log::warn!("auth request failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            let message = auth_error_message(status, body_message(&text).as_deref());
            return Err(ApiError::Status { status, message });
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

async fn fetch<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    into_data(call(request).await?)
}

async fn fetch_ack(request: ApiRequest) -> Result<(), ApiError> {
    into_ack(call(request).await?)
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn hospital_endpoint(id: &str) -> String {
    format!("/hospitals/{}", segment(id))
}

fn hospital_search_endpoint(term: &str) -> String {
    format!("/hospitals/search/{}", segment(term))
}

fn hospital_queue_endpoint(id: &str) -> String {
    format!("/hospitals/{}/queue", segment(id))
}

fn symptom_search_endpoint(symptom: &str) -> String {
    format!("/specialties/search-symptom/{}", segment(symptom))
}

fn slot_endpoint(id: &str) -> String {
    format!("/slots/{}", segment(id))
}

fn slot_action_endpoint(id: &str, action: &str) -> String {
    format!("/slots/{}/{action}", segment(id))
}

fn hospital_slots_endpoint(hospital_id: &str) -> String {
    format!("/slots/hospital/{}", segment(hospital_id))
}

fn booking_endpoint(id: &str) -> String {
    format!("/bookings/{}", segment(id))
}

fn booking_cancel_endpoint(id: &str) -> String {
    format!("/bookings/{}/cancel", segment(id))
}

fn hospital_bookings_endpoint(hospital_id: &str) -> String {
    format!("/bookings/hospital/{}", segment(hospital_id))
}

fn date_query(date: Option<&str>) -> Vec<(&'static str, String)> {
    date.filter(|d| !d.is_empty())
        .map(|d| vec![("date", d.to_owned())])
        .unwrap_or_default()
}

#[derive(Serialize)]
struct RoleBody {
    role: Role,
}

// Request builders, one per endpoint. The async wrappers below only send them.

fn list_hospitals_request(query: &HospitalQuery) -> ApiRequest {
    ApiRequest::get("/hospitals").with_query(query.to_pairs())
}

fn get_hospital_request(id: &str) -> ApiRequest {
    ApiRequest::get(hospital_endpoint(id))
}

fn search_hospitals_request(term: &str) -> ApiRequest {
    ApiRequest::get(hospital_search_endpoint(term))
}

fn update_queue_request(hospital_id: &str, update: &QueueUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Patch, hospital_queue_endpoint(hospital_id)).with_json(update)
}

fn list_specialties_request() -> ApiRequest {
    ApiRequest::get("/specialties")
}

fn search_specialties_request(symptom: &str) -> ApiRequest {
    ApiRequest::get(symptom_search_endpoint(symptom))
}

fn list_slots_request(hospital_id: &str, date: Option<&str>) -> ApiRequest {
    ApiRequest::get("/slots")
        .with_query(vec![("hospitalId", hospital_id.to_owned())])
        .with_query(date_query(date))
}

fn get_slot_request(id: &str) -> ApiRequest {
    ApiRequest::get(slot_endpoint(id))
}

fn list_hospital_slots_request(hospital_id: &str, date: Option<&str>) -> ApiRequest {
    ApiRequest::get(hospital_slots_endpoint(hospital_id)).with_query(date_query(date))
}

fn create_slot_request(slot: &NewSlot) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/slots").with_json(slot)
}

fn update_slot_request(id: &str, slot: &NewSlot) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Put, slot_endpoint(id)).with_json(slot)
}

fn delete_slot_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, slot_endpoint(id))
}

fn toggle_slot_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, slot_action_endpoint(id, "toggle"))
}

fn close_slot_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, slot_action_endpoint(id, "close"))
}

fn create_booking_request(booking: &NewBooking) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/bookings").with_json(booking)
}

fn my_bookings_request() -> ApiRequest {
    ApiRequest::get("/bookings/me")
}

fn get_booking_request(id: &str) -> ApiRequest {
    ApiRequest::get(booking_endpoint(id))
}

fn hospital_bookings_request(hospital_id: &str, date: Option<&str>) -> ApiRequest {
    ApiRequest::get(hospital_bookings_endpoint(hospital_id)).with_query(date_query(date))
}

fn cancel_booking_request(id: &str) -> ApiRequest {
    ApiRequest::new(Method::Patch, booking_cancel_endpoint(id))
}

fn set_role_request(role: Role) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/users/set-role").with_json(&RoleBody { role })
}

fn current_user_request() -> ApiRequest {
    ApiRequest::get("/users/me")
}

fn create_patient_profile_request(profile: &NewPatientProfile) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Post, "/patient-profiles").with_json(profile)
}

fn my_patient_profile_request() -> ApiRequest {
    ApiRequest::get("/patient-profiles/me")
}

fn update_patient_profile_request(update: &PatientProfileUpdate) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Patch, "/patient-profiles/me").with_json(update)
}

fn health_check_request() -> ApiRequest {
    ApiRequest::get("/health")
}

/// `GET /hospitals` with optional filters.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn list_hospitals(query: &HospitalQuery) -> Result<Vec<Hospital>, ApiError> {
    fetch(list_hospitals_request(query)).await
}

/// `GET /hospitals/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn get_hospital(id: &str) -> Result<Hospital, ApiError> {
    fetch(get_hospital_request(id)).await
}

/// `GET /hospitals/search/{term}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn search_hospitals(term: &str) -> Result<Vec<Hospital>, ApiError> {
    fetch(search_hospitals_request(term)).await
}

/// `PATCH /hospitals/{id}/queue`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn update_queue(hospital_id: &str, update: &QueueUpdate) -> Result<(), ApiError> {
    fetch_ack(update_queue_request(hospital_id, update)?).await
}

/// `GET /specialties`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn list_specialties() -> Result<Vec<Specialty>, ApiError> {
    fetch(list_specialties_request()).await
}

/// `GET /specialties/search-symptom/{symptom}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn search_specialties_by_symptom(symptom: &str) -> Result<Vec<Specialty>, ApiError> {
    fetch(search_specialties_request(symptom)).await
}

/// `GET /slots` for a hospital, optionally narrowed to one date.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn list_slots(hospital_id: &str, date: Option<&str>) -> Result<Vec<Slot>, ApiError> {
    fetch(list_slots_request(hospital_id, date)).await
}

/// `GET /slots/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn get_slot(id: &str) -> Result<Slot, ApiError> {
    fetch(get_slot_request(id)).await
}

/// `GET /slots/hospital/{hospital_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn list_hospital_slots(hospital_id: &str, date: Option<&str>) -> Result<Vec<Slot>, ApiError> {
    fetch(list_hospital_slots_request(hospital_id, date)).await
}

/// `POST /slots`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn create_slot(slot: &NewSlot) -> Result<Slot, ApiError> {
    fetch(create_slot_request(slot)?).await
}

/// `PUT /slots/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn update_slot(id: &str, slot: &NewSlot) -> Result<Slot, ApiError> {
    fetch(update_slot_request(id, slot)?).await
}

/// `DELETE /slots/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn delete_slot(id: &str) -> Result<(), ApiError> {
    fetch_ack(delete_slot_request(id)).await
}

/// `PATCH /slots/{id}/toggle`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn toggle_slot(id: &str) -> Result<Slot, ApiError> {
    fetch(toggle_slot_request(id)).await
}

/// `PATCH /slots/{id}/close`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn close_slot(id: &str) -> Result<Slot, ApiError> {
    fetch(close_slot_request(id)).await
}

/// `POST /bookings`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn create_booking(booking: &NewBooking) -> Result<Booking, ApiError> {
    fetch(create_booking_request(booking)?).await
}

/// `GET /bookings/me`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn my_bookings() -> Result<Vec<Booking>, ApiError> {
    fetch(my_bookings_request()).await
}

/// `GET /bookings/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn get_booking(id: &str) -> Result<Booking, ApiError> {
    fetch(get_booking_request(id)).await
}

/// `GET /bookings/hospital/{hospital_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn hospital_bookings(hospital_id: &str, date: Option<&str>) -> Result<Vec<Booking>, ApiError> {
    fetch(hospital_bookings_request(hospital_id, date)).await
}

/// `PATCH /bookings/{id}/cancel`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn cancel_booking(id: &str) -> Result<(), ApiError> {
    fetch_ack(cancel_booking_request(id)).await
}

/// `POST /users/set-role`; returns a fresh token and user record.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn set_role(role: Role) -> Result<AuthResponse, ApiError> {
    fetch(set_role_request(role)?).await
}

/// `GET /users/me`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn current_user() -> Result<User, ApiError> {
    fetch(current_user_request()).await
}

/// `POST /patient-profiles`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn create_patient_profile(profile: &NewPatientProfile) -> Result<PatientProfile, ApiError> {
    fetch(create_patient_profile_request(profile)?).await
}

/// `GET /patient-profiles/me`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn my_patient_profile() -> Result<PatientProfile, ApiError> {
    fetch(my_patient_profile_request()).await
}

/// `PATCH /patient-profiles/me`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects it.
pub async fn update_patient_profile(update: &PatientProfileUpdate) -> Result<PatientProfile, ApiError> {
    fetch(update_patient_profile_request(update)?).await
}

/// `GET /health`.
///
/// # Errors
///
/// Returns an error if the API is unreachable or unhealthy.
pub async fn health_check() -> Result<(), ApiError> {
    fetch_ack(health_check_request()).await
}

// =============================================================================
// OTP AUTH
// =============================================================================

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyBody<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct UpdateRoleBody<'a> {
    email: &'a str,
    role: Role,
}

/// Send a one-time code to `email` via `POST /auth/send-otp`.
///
/// # Errors
///
/// Returns a user-facing error if the request fails or is refused.
pub async fn send_otp(email: &str) -> Result<OtpResponse, ApiError> {
    call_auth("/send-otp", &EmailBody { email }).await
}

/// Exchange an OTP for a session via `POST /auth/verify-otp`.
///
/// # Errors
///
/// Returns a user-facing error if the request fails or the code is rejected.
pub async fn verify_otp(email: &str, otp: &str) -> Result<AuthResponse, ApiError> {
    call_auth("/verify-otp", &VerifyBody { email, otp }).await
}

/// Assign a role via `POST /auth/update-role`; returns a fresh session.
///
/// # Errors
///
/// Returns a user-facing error if the request fails or is refused.
pub async fn update_role(email: &str, role: Role) -> Result<AuthResponse, ApiError> {
    call_auth("/update-role", &UpdateRoleBody { email, role }).await
}
