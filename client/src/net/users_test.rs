use super::*;

#[test]
fn auth_paths_resolve_against_base() {
    let client = ApiClient::new("https://api.test");
    assert_eq!(client.url(LOGIN_PATH), "https://api.test/users/login");
    assert_eq!(client.url(REGISTER_PATH), "https://api.test/users/register");
}

#[test]
fn login_request_serializes_credentials_only() {
    let body = LoginRequest { username: "ann".to_owned(), password: "secret".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "username": "ann", "password": "secret" })
    );
}
