//! Shared symptom and specialty search state.
//!
//! DESIGN
//! ======
//! The specialty catalogue is fetched once at app start and reused by the home
//! search and the hospital filters, so switching pages never refetches it.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Specialty;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub specialties: Vec<Specialty>,
    pub selected_symptom: Option<String>,
    pub selected_specialty: Option<String>,
    pub loading: bool,
}

impl SearchState {
    /// State while the catalogue request is in flight.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn loaded(&mut self, specialties: Vec<Specialty>) {
        self.specialties = specialties;
        self.loading = false;
    }

    /// Specialties whose name or listed symptoms contain `query`,
    /// case-insensitively. A blank query matches nothing.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<&Specialty> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.specialties
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.symptoms.iter().any(|sym| sym.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Record the chosen symptom; a blank symptom clears both selections.
    pub fn select_symptom(&mut self, symptom: &str) {
        let symptom = symptom.trim();
        if symptom.is_empty() {
            self.clear();
            return;
        }
        self.selected_symptom = Some(symptom.to_owned());
    }

    pub fn select_specialty(&mut self, name: Option<String>) {
        self.selected_specialty = name.filter(|n| !n.is_empty());
    }

    pub fn clear(&mut self) {
        self.selected_symptom = None;
        self.selected_specialty = None;
    }
}
