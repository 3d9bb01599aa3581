//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth form chrome and notifications while reading
//! shared state from Leptos context providers.

pub mod auth_form;
pub mod submit_button;
pub mod theme_toggle;
pub mod toaster;
