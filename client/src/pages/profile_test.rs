use gate::AccountStatus;

use super::*;

#[test]
fn profile_rows_skip_missing_and_empty_fields() {
    let login = LoginState {
        authenticated: true,
        orcid: Some("0000-0002-1825-0097".into()),
        email: Some("ada@example.org".into()),
        organization: Some(String::new()),
        status: Some(AccountStatus::Verified),
        ..LoginState::default()
    };
    let rows = profile_rows(&login);
    assert_eq!(
        rows,
        vec![
            ("ORCID iD", "0000-0002-1825-0097".to_owned()),
            ("E-mail", "ada@example.org".to_owned()),
            ("Status", "VERIFIED".to_owned()),
        ]
    );
}

#[test]
fn profile_rows_empty_when_signed_out() {
    assert!(profile_rows(&LoginState::signed_out()).is_empty());
}
