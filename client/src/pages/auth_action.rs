//! Submission orchestration shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one form's `SubmissionState`, forwards submitted fields to the action
//! endpoint, and runs the result reducer from an effect keyed on the attempt
//! sequence, so unrelated re-renders never repeat a toast or a refresh.

#[cfg(test)]
#[path = "auth_action_test.rs"]
mod auth_action_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{AuthFields, AuthFlow};
use crate::state::auth::AuthState;
use crate::state::submission::{SubmissionState, SubmitControl};
use crate::state::toast::ToastState;
use crate::util::auth_effects::{AuthEffects, LiveAuthEffects, ResultReducer};

/// Handles a page needs to wire `AuthForm` and `SubmitButton`.
#[derive(Clone, Copy)]
pub struct AuthAction {
    pub submission: RwSignal<SubmissionState>,
    /// Last submitted email, redisplayed after a failed attempt.
    pub email: RwSignal<String>,
    pub control: Signal<SubmitControl>,
    pub on_submit: Callback<AuthFields>,
}

/// Feed a settled attempt through the reducer and apply its verdict.
///
/// Safe to call on every state change: the reducer ignores an attempt it has
/// already seen, including the re-run caused by `mark_success` itself.
pub(crate) fn settle<E: AuthEffects + ?Sized>(state: &mut SubmissionState, reducer: &mut ResultReducer, effects: &E) {
    let Some((seq, result)) = state.settled() else {
        return;
    };
    if reducer.observe(seq, result, effects) {
        state.mark_success();
    }
}

pub fn use_auth_action(flow: AuthFlow) -> AuthAction {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let effects = LiveAuthEffects::new(toasts, auth, use_navigate());

    let submission = RwSignal::new(SubmissionState::default());
    let email = RwSignal::new(String::new());

    let mut reducer = ResultReducer::new(flow);
    Effect::new(move || {
        let current = submission.get();
        let mut next = current;
        settle(&mut next, &mut reducer, &effects);
        if next != current {
            submission.set(next);
        }
    });

    let on_submit = Callback::new(move |fields: AuthFields| {
        let Some(seq) = submission.try_update(SubmissionState::begin).flatten() else {
            return;
        };
        email.set(fields.email.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit(flow, &fields).await;
            // The page may have unmounted while the request was in flight.
            let _ = submission.try_update(|s| s.resolve(seq, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, fields);
    });

    let control = Signal::derive(move || submission.get().control());

    AuthAction { submission, email, control, on_submit }
}
