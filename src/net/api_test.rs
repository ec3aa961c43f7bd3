use super::*;

// =============================================================
// URL and header formatting
// =============================================================

#[test]
fn api_url_prefixes_endpoint() {
    assert_eq!(api_url("/users/me"), "/api/users/me");
    assert_eq!(api_url("/vms"), "/api/vms");
}

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn success_statuses_classify_as_success() {
    assert_eq!(classify_status(200), StatusClass::Success);
    assert_eq!(classify_status(201), StatusClass::Success);
    assert_eq!(classify_status(204), StatusClass::Success);
}

#[test]
fn unauthorized_classifies_as_session_expired() {
    assert_eq!(classify_status(401), StatusClass::SessionExpired);
}

#[test]
fn other_errors_classify_as_failure() {
    assert_eq!(classify_status(400), StatusClass::Failure);
    assert_eq!(classify_status(403), StatusClass::Failure);
    assert_eq!(classify_status(404), StatusClass::Failure);
    assert_eq!(classify_status(500), StatusClass::Failure);
}

// =============================================================
// Application-error messages
// =============================================================

#[test]
fn detail_message_extracts_server_detail() {
    let body = serde_json::json!({"detail": "Inactive user"});
    assert_eq!(detail_message(&body), Some("Inactive user"));
}

#[test]
fn detail_message_ignores_missing_or_non_string_detail() {
    assert_eq!(detail_message(&serde_json::json!({})), None);
    assert_eq!(detail_message(&serde_json::json!({"detail": 42})), None);
}

#[test]
fn http_error_message_prefers_server_detail() {
    assert_eq!(http_error_message(400, Some("Username already registered")), "Username already registered");
}

#[test]
fn http_error_message_falls_back_to_status() {
    assert_eq!(http_error_message(500, None), "HTTP error: status 500");
}
