//! Result reducer for the login and register flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The action endpoint answers with a classified `SubmissionResult`; this
//! module turns each answer into at most one notification and, on success,
//! a session refresh followed by a view refresh. The side effects are
//! injected through `AuthEffects` so the mapping is testable without a
//! browser.

#[cfg(test)]
#[path = "auth_effects_test.rs"]
mod auth_effects_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{AuthFlow, SubmissionResult};
use crate::state::auth::AuthState;
use crate::state::toast::{Notice, ToastState};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials!";
pub const MSG_INVALID_DATA: &str = "Failed validating your submission!";
pub const MSG_USER_EXISTS: &str = "Account already exists!";
pub const MSG_REGISTER_FAILED: &str = "Failed to create account!";
pub const MSG_REGISTER_SUCCESS: &str = "Account created successfully!";

/// Capabilities the reducer drives. Implementations are fire-and-forget.
pub trait AuthEffects {
    fn notify(&self, notice: Notice);
    fn refresh_session(&self);
    fn refresh_view(&self);
}

/// What a settled result asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    pub notice: Option<Notice>,
    pub success: bool,
}

/// Map a (flow, result) pair to its reaction.
pub fn reaction(flow: AuthFlow, result: SubmissionResult) -> Reaction {
    match (flow, result) {
        (_, SubmissionResult::Idle) => Reaction::default(),
        (_, SubmissionResult::InvalidData) => Reaction { notice: Some(Notice::error(MSG_INVALID_DATA)), success: false },
        (AuthFlow::Login, SubmissionResult::Failed | SubmissionResult::UserExists) => {
            Reaction { notice: Some(Notice::error(MSG_INVALID_CREDENTIALS)), success: false }
        }
        (AuthFlow::Login, SubmissionResult::Success) => Reaction { notice: None, success: true },
        (AuthFlow::Register, SubmissionResult::UserExists) => {
            Reaction { notice: Some(Notice::error(MSG_USER_EXISTS)), success: false }
        }
        (AuthFlow::Register, SubmissionResult::Failed) => {
            Reaction { notice: Some(Notice::error(MSG_REGISTER_FAILED)), success: false }
        }
        (AuthFlow::Register, SubmissionResult::Success) => {
            Reaction { notice: Some(Notice::success(MSG_REGISTER_SUCCESS)), success: true }
        }
    }
}

/// Runs a flow's side effects once per settled attempt.
#[derive(Clone, Copy, Debug)]
pub struct ResultReducer {
    flow: AuthFlow,
    last_seq: Option<u64>,
}

impl ResultReducer {
    pub fn new(flow: AuthFlow) -> Self {
        Self { flow, last_seq: None }
    }

    pub fn flow(&self) -> AuthFlow {
        self.flow
    }

    /// React to attempt `seq` having settled with `result`.
    ///
    /// Repeated observations of the same `seq` are ignored. Returns `true`
    /// when the caller must mark the form as successful.
    pub fn observe<E: AuthEffects + ?Sized>(&mut self, seq: u64, result: SubmissionResult, effects: &E) -> bool {
        if self.last_seq == Some(seq) {
            return false;
        }
        self.last_seq = Some(seq);

        let Reaction { notice, success } = reaction(self.flow, result);
        if let Some(notice) = notice {
            effects.notify(notice);
        }
        if success {
            effects.refresh_session();
            effects.refresh_view();
        }
        success
    }
}

/// Queue a toast and schedule its dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|state| state.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(crate::state::toast::TOAST_TTL_MS)))
            .await;
        let _ = toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Re-fetch the signed-in user into the session context.
pub fn refresh_session(auth: RwSignal<AuthState>) {
    auth.update(AuthState::begin_refresh);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        let _ = auth.try_update(|state| state.finish_refresh(user));
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|state| state.finish_refresh(None));
}

/// Browser-backed effects: toasts, session context, router.
#[derive(Clone)]
pub struct LiveAuthEffects<F> {
    toasts: RwSignal<ToastState>,
    auth: RwSignal<AuthState>,
    navigate: F,
}

impl<F> LiveAuthEffects<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(toasts: RwSignal<ToastState>, auth: RwSignal<AuthState>, navigate: F) -> Self {
        Self { toasts, auth, navigate }
    }
}

impl<F> AuthEffects for LiveAuthEffects<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn notify(&self, notice: Notice) {
        push_toast(self.toasts, notice);
    }

    fn refresh_session(&self) {
        refresh_session(self.auth);
    }

    /// Re-resolve the current route so guards and route data see the new
    /// session.
    fn refresh_view(&self) {
        let options = NavigateOptions { replace: true, scroll: false, ..NavigateOptions::default() };
        (self.navigate)(&current_path(), options);
    }
}

fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return "/".to_owned();
        };
        let path = location.pathname().unwrap_or_else(|_| "/".to_owned());
        let search = location.search().unwrap_or_default();
        format!("{path}{search}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}
