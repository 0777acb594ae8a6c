//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is wrapped in an `RwSignal` and provided through context
//! at the app root; pages read and mutate it with `expect_context`.

pub mod auth;
pub mod search;
