//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `submission`, `toast`, `ui`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod submission;
pub mod toast;
pub mod ui;
