//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the rules they carry stay testable without a DOM.

pub mod age;
pub mod storage;
pub mod validators;
