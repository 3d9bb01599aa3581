//! Shared wire DTOs for the auth client/server boundary.
//!
//! DESIGN
//! ======
//! Action outcomes are a closed enum so every consumer matches exhaustively;
//! the JSON shape (`{"status": "..."}`) mirrors what the auth endpoints answer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Outcome of one login or registration attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Payload was rejected before reaching business logic.
    InvalidData,
    /// Bad credentials (login) or account creation failure (register).
    Failed,
    /// Register only: the requested identity already exists.
    UserExists,
    /// Attempt accepted.
    Success,
}

/// Which of the two authentication flows a page drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    /// Action endpoint for this flow.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/api/auth/login",
            Self::Register => "/api/auth/register",
        }
    }

    /// Client route rendering this flow.
    pub fn route(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// The flow a user is pointed to from this one's cross-link.
    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Field set posted to the action endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub remember: bool,
}

impl AuthFields {
    /// Build a field set from raw form values. The email is trimmed; the
    /// password is passed through untouched.
    pub fn new(email: &str, password: &str, remember: bool) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned(), remember }
    }
}

/// The signed-in user as reported by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name shown in page chrome, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.email)
    }
}
