use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn make_token(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
}

fn alice_token() -> String {
    make_token(&serde_json::json!({ "id": 1, "name": "Alice", "username": "alice", "exp": 2_000 }))
}

#[test]
fn restoring_state_is_loading_without_user() {
    let state = SessionState::restoring();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn restore_from_without_token_clears_loading() {
    let mut state = SessionState::restoring();
    assert!(!state.restore_from(None, 1_000));
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_from_valid_token_sets_user() {
    let mut state = SessionState::restoring();
    assert!(!state.restore_from(Some(&alice_token()), 1_000));
    assert_eq!(state.user_id(), Some(1));
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
}

#[test]
fn restore_from_malformed_token_is_logged_out() {
    let mut state = SessionState::restoring();
    assert!(state.restore_from(Some("not-a-jwt"), 1_000));
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_from_expired_token_is_logged_out() {
    let mut state = SessionState::restoring();
    assert!(state.restore_from(Some(&alice_token()), 5_000));
    assert_eq!(state.user, None);
}

#[test]
fn sign_in_with_returns_decoded_user() {
    let mut state = SessionState::default();
    let user = state.sign_in_with(&alice_token()).unwrap().clone();
    assert_eq!(user.name, "Alice");
    assert_eq!(state.user, Some(user));
}

#[test]
fn sign_in_with_bad_token_signs_out() {
    let mut state = SessionState::default();
    state.sign_in_with(&alice_token()).unwrap();
    assert!(state.sign_in_with("a.b").is_err());
    assert_eq!(state.user, None);
}

#[test]
fn sign_out_clears_user() {
    let mut state = SessionState::default();
    state.sign_in_with(&alice_token()).unwrap();
    state.sign_out();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
}
