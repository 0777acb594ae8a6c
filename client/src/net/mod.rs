//! Networking modules for the external booking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the implicit-logout-on-401 rule, and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
