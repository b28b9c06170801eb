use super::*;

#[test]
fn valid_registration_builds_request() {
    let request = validate_register(" carol ", "pw", "pw", " Carol C ").unwrap();
    assert_eq!(
        request,
        RegisterRequest { username: "carol".to_owned(), password: "pw".to_owned(), name: "Carol C".to_owned() }
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let errors = validate_register("carol", "pw", "pw2", "Carol").unwrap_err();
    assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    assert_eq!(errors.username, None);
    assert_eq!(errors.password, None);
    assert_eq!(errors.name, None);
}

#[test]
fn missing_fields_are_all_reported() {
    let errors = validate_register("", "", "", " ").unwrap_err();
    assert_eq!(errors.username.as_deref(), Some("Username is required"));
    assert_eq!(errors.password.as_deref(), Some("Password is required"));
    assert_eq!(errors.confirm_password.as_deref(), Some("Confirm your password"));
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
}
