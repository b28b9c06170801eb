use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User {
        id: 1,
        name: "Alice".to_owned(),
        username: "alice".to_owned(),
        permissions: Vec::new(),
        exp: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn signed_in_user_is_sent_to_dashboard() {
    let state = SessionState { user: Some(make_user()), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_authed(&state));
}

#[test]
fn restoring_session_never_redirects() {
    let state = SessionState::restoring();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}
