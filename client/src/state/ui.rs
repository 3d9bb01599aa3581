//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme) out of session and submission state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided by the root layout.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
