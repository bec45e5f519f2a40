use super::*;

#[test]
fn no_document_means_no_record() {
    assert!(DocumentCookieSource.profile_record("auth_token").is_none());
}
