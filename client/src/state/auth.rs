//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by the root layout as the session provider. Route guards read it,
//! and a successful login or registration asks it to re-synchronize.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in `loading` so guards wait for the first session fetch.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mark a session fetch as in flight. The current user is kept so the
    /// UI does not flicker while re-synchronizing.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the result of a session fetch.
    pub fn finish_refresh(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}
