use super::*;

#[test]
fn valid_login_trims_username() {
    let request = validate_login("  alice ", "secret").unwrap();
    assert_eq!(request, LoginRequest { username: "alice".to_owned(), password: "secret".to_owned() });
}

#[test]
fn empty_fields_are_reported_together() {
    let errors = validate_login("   ", "").unwrap_err();
    assert_eq!(errors.username.as_deref(), Some("Username is required"));
    assert_eq!(errors.password.as_deref(), Some("Password is required"));
}

#[test]
fn password_whitespace_is_kept() {
    let request = validate_login("bob", " pw ").unwrap();
    assert_eq!(request.password, " pw ");
}
