//! Wire DTOs for the booking REST API.
//!
//! DESIGN
//! ======
//! The API is external and loosely typed, so decoding is forgiving: unknown
//! fields are ignored, optional fields default, and references that may come
//! back either populated or as bare IDs decode to `None` when not populated.
//! `User` keeps unrecognized fields so the persisted copy round-trips.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub use crate::routing::access::Role;

/// Minutes of expected wait per confirmed patient in the hospital queue.
pub const MINUTES_PER_PATIENT: u32 = 15;

const DEFAULT_RATING: f64 = 4.0;

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_bool().unwrap_or(false))
}

fn deserialize_populated<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_object() {
        Ok(serde_json::from_value(raw).ok())
    } else {
        Ok(None)
    }
}

/// Standard `{ success, data, message }` response wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The authenticated account as issued by the auth service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_profile_complete: bool,
    /// Fields this client does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Partial user update merged into the session (e.g. after profile completion).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_profile_complete: Option<bool>,
}

impl User {
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(complete) = update.is_profile_complete {
            self.is_profile_complete = complete;
        }
    }
}

/// Successful OTP verification or role update.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OtpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeRange {
    #[serde(default)]
    pub min: u32,
    #[serde(default)]
    pub max: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpdHours {
    pub start: String,
    pub end: String,
}

impl Default for OpdHours {
    fn default() -> Self {
        Self { start: "9:00".to_owned(), end: "20:00".to_owned() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facilities {
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub rating: Option<Rating>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub fees: Option<FeeRange>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub opd_hours: Option<OpdHours>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub contact: Option<Contact>,
    /// Either populated specialty objects or bare names/IDs.
    #[serde(default)]
    pub specialties: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub facilities: Option<Facilities>,
    #[serde(default)]
    pub queue_length: u32,
    #[serde(default)]
    pub current_wait_time: u32,
    #[serde(default)]
    pub verified: bool,
}

impl Hospital {
    /// Display names for the hospital's specialties.
    #[must_use]
    pub fn specialty_names(&self) -> Vec<String> {
        self.specialties
            .iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(name) => Some(name.clone()),
                serde_json::Value::Object(obj) => obj.get("name").and_then(|n| n.as_str()).map(str::to_owned),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn address(&self) -> &str {
        self.location
            .as_ref()
            .and_then(|l| l.address.as_deref())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_emergency(&self) -> bool {
        self.facilities.as_ref().is_some_and(|f| f.is_emergency)
    }

    /// Average rating, or 4.0 for hospitals nobody has rated yet.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        self.rating.as_ref().map_or(DEFAULT_RATING, |r| r.average)
    }

    #[must_use]
    pub fn fee_range(&self) -> FeeRange {
        self.fees.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn opd_hours(&self) -> OpdHours {
        self.opd_hours.clone().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub is_unlimited: bool,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub doctor: Option<Doctor>,
}

impl Slot {
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        self.is_unlimited || self.available_count > 0
    }

    #[must_use]
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl BookingStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other => "unknown",
        }
    }
}

/// Walk-in contact details captured with a booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfileRef {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub token_number: Option<u32>,
    #[serde(default)]
    pub queue_position: Option<u32>,
    #[serde(default)]
    pub estimated_wait_time: Option<u32>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub hospital: Option<Hospital>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub slot: Option<Slot>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub user: Option<BookingContact>,
    #[serde(default, deserialize_with = "deserialize_populated")]
    pub patient_profile: Option<PatientProfileRef>,
}

impl Booking {
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Name shown for the patient: profile name first, then walk-in contact.
    #[must_use]
    pub fn patient_name(&self) -> Option<&str> {
        self.patient_profile
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .or_else(|| self.user.as_ref().and_then(|u| u.name.as_deref()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub slot_id: String,
    /// Contact details of the person attending.
    pub user: WalkInPatient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WalkInPatient {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub gender: Gender,
}

/// Counts of a hospital's bookings by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl BookingStats {
    #[must_use]
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total: bookings.len(),
            confirmed: count(BookingStatus::Confirmed),
            completed: count(BookingStatus::Completed),
            cancelled: count(BookingStatus::Cancelled),
        }
    }

    /// Queue figures derived from confirmed bookings.
    #[must_use]
    pub fn queue_update(&self) -> QueueUpdate {
        let queue_length = u32::try_from(self.confirmed).unwrap_or(u32::MAX);
        QueueUpdate {
            queue_length,
            current_wait_time: queue_length.saturating_mul(MINUTES_PER_PATIENT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueUpdate {
    pub queue_length: u32,
    pub current_wait_time: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Inverse of [`Gender::label`].
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatientProfile {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSlot {
    pub hospital_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: u32,
    pub is_unlimited: bool,
}

/// Query filters for the hospital list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HospitalQuery {
    pub specialty: Option<String>,
    pub emergency: bool,
    pub search: Option<String>,
}

impl HospitalQuery {
    /// Encode as `key=value` pairs in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(specialty) = self.specialty.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("specialty", specialty.to_owned()));
        }
        if self.emergency {
            pairs.push(("emergency", "true".to_owned()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }
}
