//! Client-side route table and access control.
//!
//! SYSTEM CONTEXT
//! ==============
//! `paths` names every application route and partitions them into access
//! classes; `access` turns a session snapshot plus a path into a render or
//! redirect decision.

pub mod access;
pub mod paths;
