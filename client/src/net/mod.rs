//! Networking modules for the auth REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the action endpoints and session lookup, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
