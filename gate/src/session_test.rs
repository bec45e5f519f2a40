use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::login::AccountStatus;
use crate::profile::StaticProfileSource;

#[derive(Default)]
struct MockApi {
    validate_ok: bool,
    invalidate_ok: bool,
    validate_calls: AtomicUsize,
    invalidate_calls: AtomicUsize,
}

impl MockApi {
    fn new(validate_ok: bool, invalidate_ok: bool) -> Self {
        Self { validate_ok, invalidate_ok, ..Self::default() }
    }
}

#[async_trait::async_trait]
impl SessionApi for MockApi {
    async fn validate_session(&self) -> Result<(), GateError> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        if self.validate_ok { Ok(()) } else { Err(GateError::Rejected { status: 401 }) }
    }

    async fn invalidate_session(&self) -> Result<(), GateError> {
        self.invalidate_calls.fetch_add(1, Ordering::SeqCst);
        if self.invalidate_ok { Ok(()) } else { Err(GateError::Transport("connection reset".into())) }
    }
}

const VERIFIED_RECORD: &str =
    r#"{"orcid":"0000-0002-1825-0097","name":"Ada","email":"ada@example.org","role":"ADMIN","status":"VERIFIED"}"#;

fn gate(api: MockApi, record: Option<&str>) -> SessionGate<MockApi, StaticProfileSource> {
    SessionGate::new(api, StaticProfileSource(record.map(str::to_owned)), &GateConfig::default())
}

fn checked(login: LoginState) -> SessionSnapshot {
    SessionSnapshot { phase: SessionPhase::Checked, login }
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn new_snapshot_is_unchecked_and_signed_out() {
    let snap = SessionSnapshot::new();
    assert_eq!(snap.phase, SessionPhase::Unchecked);
    assert!(!snap.login.authenticated);
    assert!(snap.needs_check());
}

#[test]
fn check_started_moves_to_checking() {
    let snap = SessionSnapshot::new().apply(SessionEvent::CheckStarted);
    assert_eq!(snap.phase, SessionPhase::Checking);
    assert!(!snap.needs_check());
}

#[test]
fn check_succeeded_replaces_login() {
    let login = LoginState::from_record_str(VERIFIED_RECORD);
    let snap = SessionSnapshot::new()
        .apply(SessionEvent::CheckStarted)
        .apply(SessionEvent::CheckSucceeded(login.clone()));
    assert_eq!(snap, checked(login));
}

#[test]
fn check_failed_clears_login() {
    let prior = checked(LoginState::from_record_str(VERIFIED_RECORD));
    let snap = prior.apply(SessionEvent::CheckStarted).apply(SessionEvent::CheckFailed);
    assert_eq!(snap, checked(LoginState::signed_out()));
}

#[test]
fn apply_leaves_previous_snapshot_untouched() {
    let prior = checked(LoginState::from_record_str(VERIFIED_RECORD));
    let before = prior.clone();
    let _ = prior.apply(SessionEvent::SignedOut);
    assert_eq!(prior, before);
}

#[test]
fn sign_out_started_only_leaves_checked() {
    let checked_snap = checked(LoginState::from_record_str(VERIFIED_RECORD));
    assert_eq!(checked_snap.apply(SessionEvent::SignOutStarted).phase, SessionPhase::Checking);

    let unchecked = SessionSnapshot::new();
    assert_eq!(unchecked.apply(SessionEvent::SignOutStarted), unchecked);
}

#[test]
fn profile_updated_keeps_phase() {
    let login = LoginState::from_record_str(VERIFIED_RECORD);
    let snap = checked(LoginState::signed_out()).apply(SessionEvent::ProfileUpdated(login.clone()));
    assert_eq!(snap, checked(login));
}

// =============================================================
// Gate outcome
// =============================================================

#[test]
fn gate_is_pending_until_checked() {
    let paths = RedirectPaths::default();
    let req = RouteRequirement::verified();
    for snap in [SessionSnapshot::new(), SessionSnapshot::new().apply(SessionEvent::CheckStarted)] {
        let outcome = snap.gate(&req, "/profile", &paths);
        assert_eq!(outcome, GateOutcome::Pending);
        assert!(!outcome.is_allowed());
        assert!(outcome.redirect_to().is_none());
    }
}

#[test]
fn gate_decides_once_checked() {
    let paths = RedirectPaths::default();
    let outcome = checked(LoginState::signed_out()).gate(&RouteRequirement::verified(), "/profile", &paths);
    assert_eq!(outcome.redirect_to(), Some("/auth/signin"));

    let outcome = checked(LoginState::from_record_str(VERIFIED_RECORD)).gate(
        &RouteRequirement::verified().with_roles(["ADMIN"]),
        "/profile",
        &paths,
    );
    assert!(outcome.is_allowed());
}

// =============================================================
// Driver
// =============================================================

#[tokio::test]
async fn check_success_hydrates_from_cached_record() {
    let gate = gate(MockApi::new(true, true), Some(VERIFIED_RECORD));
    let snap = gate.run_check(&SessionSnapshot::new()).await;
    assert_eq!(snap.phase, SessionPhase::Checked);
    assert!(snap.login.authenticated);
    assert_eq!(snap.login.email.as_deref(), Some("ada@example.org"));
    assert_eq!(snap.login.status, Some(AccountStatus::Verified));
    assert_eq!(gate.api().validate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn check_success_without_record_is_signed_out() {
    let gate = gate(MockApi::new(true, true), None);
    let snap = gate.run_check(&SessionSnapshot::new()).await;
    assert_eq!(snap, checked(LoginState::signed_out()));
}

#[tokio::test]
async fn check_success_with_emailless_record_is_signed_out() {
    let gate = gate(MockApi::new(true, true), Some(r#"{"orcid":"0000-0001","status":"VERIFIED"}"#));
    let snap = gate.run_check(&SessionSnapshot::new()).await;
    assert_eq!(snap.phase, SessionPhase::Checked);
    assert!(!snap.login.authenticated);
}

#[tokio::test]
async fn check_failure_is_silently_signed_out() {
    let gate = gate(MockApi::new(false, true), Some(VERIFIED_RECORD));
    assert_eq!(gate.check().await, SessionEvent::CheckFailed);
    let snap = gate.run_check(&SessionSnapshot::new()).await;
    assert_eq!(snap, checked(LoginState::signed_out()));
}

#[tokio::test]
async fn sign_out_clears_state_even_when_invalidate_fails() {
    let gate = gate(MockApi::new(true, false), Some(VERIFIED_RECORD));
    let signed_in = gate.run_check(&SessionSnapshot::new()).await;
    assert!(signed_in.login.authenticated);

    let snap = gate.run_sign_out(&signed_in).await;
    assert_eq!(snap, checked(LoginState::signed_out()));
    assert!(snap.login.orcid.is_none());
    assert!(snap.login.role.is_none());
    assert_eq!(gate.api().invalidate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sign_out_success_clears_state() {
    let gate = gate(MockApi::new(true, true), Some(VERIFIED_RECORD));
    assert_eq!(gate.sign_out().await, SessionEvent::SignedOut);
}

#[test]
fn cached_login_uses_configured_cookie_name() {
    let source = crate::profile::CookieHeaderSource::new(format!(
        "auth_token=%7B%7D; portal_profile={}",
        "%7B%22email%22%3A%22ada%40example.org%22%7D"
    ));
    let config = GateConfig { cookie_name: "portal_profile".into(), ..GateConfig::default() };
    let gate = SessionGate::new(MockApi::default(), source, &config);
    assert!(gate.cached_login().authenticated);
}
