//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, guards, cards, forms) while
//! reading and writing the auth and search state from Leptos context.

pub mod booking_form;
pub mod hospital_card;
pub mod loading_spinner;
pub mod navbar;
pub mod protected_route;
pub mod symptom_search;
