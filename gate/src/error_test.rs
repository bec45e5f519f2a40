use super::*;

#[test]
fn rejected_message_includes_status() {
    let err = GateError::Rejected { status: 401 };
    assert_eq!(err.to_string(), "session request rejected: status 401");
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(GateError::Config("x".into()).error_code(), "E_CONFIG_PARSE");
    assert_eq!(GateError::Transport("x".into()).error_code(), "E_SESSION_TRANSPORT");
    assert_eq!(GateError::Rejected { status: 500 }.error_code(), "E_SESSION_REJECTED");
    assert_eq!(GateError::HttpClientBuild("x".into()).error_code(), "E_HTTP_CLIENT_BUILD");
}

#[test]
fn transport_and_server_errors_are_retryable() {
    assert!(GateError::Transport("timeout".into()).retryable());
    assert!(GateError::Rejected { status: 503 }.retryable());
    assert!(GateError::Rejected { status: 429 }.retryable());
}

#[test]
fn auth_rejections_are_not_retryable() {
    assert!(!GateError::Rejected { status: 401 }.retryable());
    assert!(!GateError::Rejected { status: 403 }.retryable());
    assert!(!GateError::Config("bad".into()).retryable());
}
