//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form state and delegates shared
//! rendering to `components`. Access control is not a page concern: every
//! route except login sits behind `ProtectedRoute`.

pub mod booking_detail;
pub mod complete_profile;
pub mod home;
pub mod hospital_access;
pub mod hospital_dashboard;
pub mod hospital_detail;
pub mod hospitals;
pub mod login;
pub mod my_bookings;
pub mod patient_access_denied;
pub mod select_role;
