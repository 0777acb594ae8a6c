//! Route access-control decision function.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` feeds the current session snapshot and location into
//! [`decide`] on every reactive pass and acts on the result. Keeping the
//! decision pure lets it be tested without mounting any UI.
//!
//! DESIGN
//! ======
//! Rules are an ordered list; the first match wins. Role-setup pages are
//! checked before the role and profile checks, otherwise a patient with an
//! incomplete profile could never reach `/complete-profile`. `/login` is
//! exempt only while signed out; a signed-in session visiting it goes through
//! the role and profile rules like any other protected path.
//!
//! Misrouting is deliberately asymmetric: a patient on an admin route lands
//! on an explicit access page, while an admin on a patient route is sent
//! quietly to the dashboard.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::paths;

/// Account role assigned after login through the role-selection step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// No role selected yet, or a value this client does not recognize.
    #[default]
    None,
    Patient,
    HospitalAdmin,
}

impl Role {
    /// Parse the API's role string. Anything unrecognized maps to `None` so
    /// the guard fails toward role selection rather than toward rendering.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "PATIENT" => Self::Patient,
            "HOSPITAL_ADMIN" => Self::HospitalAdmin,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Patient => Some("PATIENT"),
            Self::HospitalAdmin => Some("HOSPITAL_ADMIN"),
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire() {
            Some(raw) => serializer.serialize_str(raw),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().map_or(Self::None, Self::from_wire))
    }
}

/// Snapshot of the session fields the guard depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Persisted session restore still in flight.
    pub loading: bool,
    pub is_authenticated: bool,
    pub role: Role,
    /// Only meaningful for `Role::Patient`.
    pub is_profile_complete: bool,
}

/// Outcome of evaluating the access rules for one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session data is not trustworthy yet; show a placeholder.
    Loading,
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Decide whether `path` may render for `session`.
#[must_use]
pub fn decide(session: &Session, path: &str) -> Decision {
    if session.loading {
        return Decision::Loading;
    }
    if !session.is_authenticated {
        return if paths::is_auth_exempt(path) { Decision::Render } else { Decision::Redirect(paths::LOGIN) };
    }
    if paths::is_role_setup(path) {
        return Decision::Render;
    }

    match session.role {
        Role::None => Decision::Redirect(paths::SELECT_ROLE),
        Role::Patient if !session.is_profile_complete => Decision::Redirect(paths::COMPLETE_PROFILE),
        Role::Patient if paths::is_hospital_admin_only(path) => Decision::Redirect(paths::HOSPITAL_ACCESS),
        Role::HospitalAdmin if paths::is_patient_only(path) || path == paths::HOME => {
            Decision::Redirect(paths::HOSPITAL_DASHBOARD)
        }
        Role::Patient | Role::HospitalAdmin => Decision::Render,
    }
}

/// Upper bound on redirects followed by [`settle`].
pub const MAX_REDIRECT_HOPS: usize = 4;

/// Final state after following redirects from a starting path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub decision: Decision,
    pub path: String,
    pub hops: usize,
}

/// Follow redirect decisions from `path` until the guard stops redirecting
/// or [`MAX_REDIRECT_HOPS`] is reached.
#[must_use]
pub fn settle(session: &Session, path: &str) -> Settled {
    let mut current = path.to_owned();
    let mut hops = 0;
    loop {
        let decision = decide(session, &current);
        match decision {
            Decision::Redirect(target) if hops < MAX_REDIRECT_HOPS => {
                current = target.to_owned();
                hops += 1;
            }
            _ => return Settled { decision, path: current, hops },
        }
    }
}
