use super::*;
use serde_json::json;

#[test]
fn signed_out_is_unauthenticated_and_empty() {
    let login = LoginState::signed_out();
    assert!(!login.authenticated);
    assert!(login.email.is_none());
    assert!(login.role.is_none());
    assert!(login.status.is_none());
}

#[test]
fn from_record_with_email_is_authenticated() {
    let record = json!({
        "orcid": "0000-0002-1825-0097",
        "name": "Ada",
        "email": "ada@example.org",
        "organization": "Analytical Engines",
        "role": "ADMIN",
        "status": "VERIFIED"
    });
    let login = LoginState::from_record(&record);
    assert!(login.authenticated);
    assert_eq!(login.orcid.as_deref(), Some("0000-0002-1825-0097"));
    assert_eq!(login.organization.as_deref(), Some("Analytical Engines"));
    assert_eq!(login.role.as_deref(), Some("ADMIN"));
    assert_eq!(login.status, Some(AccountStatus::Verified));
}

#[test]
fn from_record_without_email_is_not_authenticated() {
    let record = json!({ "orcid": "0000-0001", "name": "Ada", "status": "VERIFIED" });
    let login = LoginState::from_record(&record);
    assert!(!login.authenticated);
    assert_eq!(login.orcid.as_deref(), Some("0000-0001"));
}

#[test]
fn from_record_empty_email_is_not_authenticated() {
    let login = LoginState::from_record(&json!({ "email": "" }));
    assert!(!login.authenticated);
}

#[test]
fn from_record_ignores_non_string_fields() {
    let login = LoginState::from_record(&json!({ "email": 42, "role": ["ADMIN"] }));
    assert!(!login.authenticated);
    assert!(login.email.is_none());
    assert!(login.role.is_none());
}

#[test]
fn from_record_non_object_is_signed_out() {
    assert_eq!(LoginState::from_record(&Value::Null), LoginState::signed_out());
    assert_eq!(LoginState::from_record(&json!("ada@example.org")), LoginState::signed_out());
    assert_eq!(LoginState::from_record(&json!([1, 2])), LoginState::signed_out());
}

#[test]
fn from_record_str_malformed_is_signed_out() {
    assert_eq!(LoginState::from_record_str("{not json"), LoginState::signed_out());
    assert_eq!(LoginState::from_record_str(""), LoginState::signed_out());
}

#[test]
fn from_record_str_parses_object() {
    let login = LoginState::from_record_str(r#"{"email":"a@b.org","status":"NOT_VERIFIED"}"#);
    assert!(login.authenticated);
    assert_eq!(login.status, Some(AccountStatus::NotVerified));
    assert!(!login.is_verified());
}

#[test]
fn account_status_keeps_unknown_values() {
    let status = AccountStatus::from("SUSPENDED".to_owned());
    assert_eq!(status, AccountStatus::Other("SUSPENDED".to_owned()));
    assert_eq!(String::from(status), "SUSPENDED");
}

#[test]
fn account_status_serde_uses_backend_strings() {
    let encoded = serde_json::to_string(&AccountStatus::NotVerified).unwrap();
    assert_eq!(encoded, r#""NOT_VERIFIED""#);
    let decoded: AccountStatus = serde_json::from_str(r#""VERIFIED""#).unwrap();
    assert_eq!(decoded, AccountStatus::Verified);
}

#[test]
fn display_name_prefers_name_then_email_then_orcid() {
    let mut login = LoginState::from_record(&json!({ "orcid": "0000-1", "email": "a@b.org", "name": "" }));
    assert_eq!(login.display_name(), Some("a@b.org"));
    login = LoginState::from_record(&json!({ "orcid": "0000-1" }));
    assert_eq!(login.display_name(), Some("0000-1"));
    assert_eq!(LoginState::signed_out().display_name(), None);
}
