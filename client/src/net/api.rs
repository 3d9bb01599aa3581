//! REST helpers for the auth action endpoints and session lookup.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every transport or decoding failure is folded into a `SubmissionResult`
//! variant so the result reducer only ever sees classified outcomes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthFields, AuthFlow, SubmissionResult, User};

/// Map an HTTP answer from an action endpoint onto a `SubmissionResult`.
///
/// A decodable body wins over the status code. Login has no `user_exists`
/// outcome, and an endpoint never legitimately answers `idle`, so both are
/// collapsed to `Failed`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_response(flow: AuthFlow, status: u16, body: Option<SubmissionResult>) -> SubmissionResult {
    if let Some(result) = body {
        return match (flow, result) {
            (_, SubmissionResult::Idle) | (AuthFlow::Login, SubmissionResult::UserExists) => SubmissionResult::Failed,
            (_, other) => other,
        };
    }
    match status {
        200..=299 => SubmissionResult::Success,
        400 | 422 => SubmissionResult::InvalidData,
        409 if flow == AuthFlow::Register => SubmissionResult::UserExists,
        _ => SubmissionResult::Failed,
    }
}

/// Classify a fully received answer. A body that could not be read is a
/// transport failure; a body that reads but does not parse falls back to the
/// status code.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_response(flow: AuthFlow, status: u16, body: Result<String, String>) -> SubmissionResult {
    match body {
        Ok(text) => classify_response(flow, status, serde_json::from_str::<SubmissionResult>(&text).ok()),
        Err(_) => SubmissionResult::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(flow: AuthFlow, detail: &str) -> String {
    format!("{} request failed: {detail}", flow.endpoint())
}

/// Invoke the action endpoint for `flow` with the submitted field set.
///
/// Never fails: transport errors come back as `SubmissionResult::Failed`.
pub async fn submit(flow: AuthFlow, fields: &AuthFields) -> SubmissionResult {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(flow.endpoint()).json(fields) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("{}", submit_failed_message(flow, &e.to_string()));
                return SubmissionResult::Failed;
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("{}", submit_failed_message(flow, &e.to_string()));
                return SubmissionResult::Failed;
            }
        };
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string());
        if let Err(e) = &body {
            log::warn!("{}", submit_failed_message(flow, e));
        }
        decode_response(flow, status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flow, fields);
        SubmissionResult::Failed
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}
