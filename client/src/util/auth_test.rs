use super::*;
use crate::net::types::User;

fn signed_in(loading: bool) -> AuthState {
    AuthState {
        user: Some(User { id: "u1".to_owned(), email: "alice@example.com".to_owned(), name: None }),
        loading,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
    assert!(!should_redirect_authed(&signed_in(true)));
}

#[test]
fn should_redirect_authed_when_user_exists() {
    let state = signed_in(false);
    assert!(should_redirect_authed(&state));
    assert!(!should_redirect_unauth(&state));
}
