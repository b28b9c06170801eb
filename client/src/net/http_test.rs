use super::*;

#[test]
fn authorization_header_wraps_token() {
    assert_eq!(authorization_header(Some("abc")), Some("Bearer abc".to_owned()));
}

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(authorization_header(None), None);
    assert_eq!(authorization_header(Some("   ")), None);
}

#[test]
fn auth_failure_statuses() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(404));
    assert!(!is_auth_failure(500));
}

#[test]
fn error_message_unwraps_json_string_body() {
    assert_eq!(
        error_message(400, "\"e4001 cannot rent because you have already rented a bike\"\n"),
        "e4001 cannot rent because you have already rented a bike"
    );
}

#[test]
fn error_message_reads_object_fields() {
    assert_eq!(error_message(500, r#"{"message":"boom"}"#), "boom");
    assert_eq!(error_message(500, r#"{"error":"bad"}"#), "bad");
}

#[test]
fn error_message_keeps_plain_text() {
    assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, ""), "request failed: 500");
    assert_eq!(error_message(500, "\"\""), "request failed: 500");
    assert_eq!(error_message(500, "{}"), "request failed: 500");
    assert_eq!(error_message(500, "42"), "request failed: 500");
}

#[test]
fn classify_failure_flags_auth_statuses() {
    assert_eq!(
        classify_failure(401, "\"e4010 unauthorized\""),
        ApiError::Unauthorized { status: 401, message: "e4010 unauthorized".to_owned() }
    );
    assert_eq!(
        classify_failure(404, "\"e4040 bike not found\""),
        ApiError::Status { status: 404, message: "e4040 bike not found".to_owned() }
    );
}

#[test]
fn client_url_joins_base() {
    let client = ApiClient::new("https://api.test/");
    assert_eq!(client.url("/bikes"), "https://api.test/bikes");
}
