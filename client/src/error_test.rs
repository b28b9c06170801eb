use super::*;

#[test]
fn api_error_message_is_server_text() {
    let err = ApiError::Status { status: 400, message: "e4000 cannot rent because the bike is rented".to_owned() };
    assert_eq!(err.message(), "e4000 cannot rent because the bike is rented");
    assert!(!err.is_unauthorized());
}

#[test]
fn api_error_unauthorized_is_flagged() {
    let err = ApiError::Unauthorized { status: 401, message: "e4010 unauthorized".to_owned() };
    assert!(err.is_unauthorized());
}

#[test]
fn api_error_decode_prefixes_message() {
    let err = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(err.message(), "invalid response: missing field `id`");
}

#[test]
fn token_error_messages_are_readable() {
    assert_eq!(TokenError::Malformed.to_string(), "token must have three dot-separated segments");
    assert_eq!(TokenError::Expired.to_string(), "token expired");
}

#[test]
fn map_error_names_the_script() {
    let err = MapError::ScriptLoad("https://maps.example/js".to_owned());
    assert_eq!(err.to_string(), "failed to load script https://maps.example/js");
}
