use super::*;

// =============================================================
// classify_response: body present
// =============================================================

#[test]
fn body_status_wins_over_http_status() {
    assert_eq!(
        classify_response(AuthFlow::Login, 401, Some(SubmissionResult::InvalidData)),
        SubmissionResult::InvalidData
    );
    assert_eq!(
        classify_response(AuthFlow::Register, 200, Some(SubmissionResult::UserExists)),
        SubmissionResult::UserExists
    );
}

#[test]
fn idle_body_collapses_to_failed() {
    assert_eq!(classify_response(AuthFlow::Login, 200, Some(SubmissionResult::Idle)), SubmissionResult::Failed);
    assert_eq!(classify_response(AuthFlow::Register, 200, Some(SubmissionResult::Idle)), SubmissionResult::Failed);
}

#[test]
fn login_user_exists_body_collapses_to_failed() {
    assert_eq!(
        classify_response(AuthFlow::Login, 409, Some(SubmissionResult::UserExists)),
        SubmissionResult::Failed
    );
}

// =============================================================
// classify_response: status code only
// =============================================================

#[test]
fn success_codes_without_body_are_success() {
    assert_eq!(classify_response(AuthFlow::Login, 200, None), SubmissionResult::Success);
    assert_eq!(classify_response(AuthFlow::Register, 201, None), SubmissionResult::Success);
}

#[test]
fn validation_codes_are_invalid_data() {
    assert_eq!(classify_response(AuthFlow::Login, 400, None), SubmissionResult::InvalidData);
    assert_eq!(classify_response(AuthFlow::Register, 422, None), SubmissionResult::InvalidData);
}

#[test]
fn conflict_is_user_exists_only_on_register() {
    assert_eq!(classify_response(AuthFlow::Register, 409, None), SubmissionResult::UserExists);
    assert_eq!(classify_response(AuthFlow::Login, 409, None), SubmissionResult::Failed);
}

#[test]
fn other_codes_are_failed() {
    for status in [0, 302, 401, 403, 500, 503] {
        assert_eq!(classify_response(AuthFlow::Login, status, None), SubmissionResult::Failed, "status {status}");
    }
}

// =============================================================
// decode_response
// =============================================================

#[test]
fn unreadable_body_is_failed_even_on_success_status() {
    let body = Err("body stream aborted".to_owned());
    assert_eq!(decode_response(AuthFlow::Login, 200, body.clone()), SubmissionResult::Failed);
    assert_eq!(decode_response(AuthFlow::Register, 201, body), SubmissionResult::Failed);
}

#[test]
fn readable_status_body_is_used() {
    let body = Ok(r#"{"status":"user_exists"}"#.to_owned());
    assert_eq!(decode_response(AuthFlow::Register, 200, body), SubmissionResult::UserExists);
}

#[test]
fn unparseable_body_falls_back_to_status() {
    assert_eq!(decode_response(AuthFlow::Login, 200, Ok("<html>".to_owned())), SubmissionResult::Success);
    assert_eq!(decode_response(AuthFlow::Register, 409, Ok(String::new())), SubmissionResult::UserExists);
    assert_eq!(decode_response(AuthFlow::Login, 500, Ok("oops".to_owned())), SubmissionResult::Failed);
}

// =============================================================
// Messages and stubs
// =============================================================

#[test]
fn submit_failed_message_names_endpoint() {
    assert_eq!(
        submit_failed_message(AuthFlow::Register, "network down"),
        "/api/auth/register request failed: network down"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_is_failed_outside_browser() {
    let fields = AuthFields::new("a@b.com", "pw", false);
    let result = futures::executor::block_on(submit(AuthFlow::Login, &fields));
    assert_eq!(result, SubmissionResult::Failed);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_helpers_are_inert_outside_browser() {
    assert_eq!(futures::executor::block_on(fetch_current_user()), None);
    futures::executor::block_on(logout());
}
