use gate::{AccountStatus, LoginState, SessionPhase, SessionSnapshot};

use super::*;

fn state(phase: SessionPhase, login: LoginState) -> AuthState {
    AuthState { session: SessionSnapshot { phase, login } }
}

fn login(status: AccountStatus, role: Option<&str>) -> LoginState {
    LoginState {
        authenticated: true,
        email: Some("ada@example.org".to_owned()),
        status: Some(status),
        role: role.map(str::to_owned),
        ..LoginState::default()
    }
}

#[test]
fn no_redirect_while_loading() {
    let cfg = GateConfig::default();
    for phase in [SessionPhase::Unchecked, SessionPhase::Checking] {
        let state = state(phase, LoginState::signed_out());
        assert_eq!(redirect_target(&state, &RouteRequirement::verified(), "/profile", &cfg), None);
    }
}

#[test]
fn redirect_to_sign_in_when_checked_and_signed_out() {
    let state = state(SessionPhase::Checked, LoginState::signed_out());
    let target = redirect_target(&state, &RouteRequirement::verified(), "/profile", &GateConfig::default());
    assert_eq!(target.as_deref(), Some("/auth/signin"));
}

#[test]
fn redirect_to_verify_when_unverified() {
    let state = state(SessionPhase::Checked, login(AccountStatus::NotVerified, None));
    let target = redirect_target(&state, &RouteRequirement::verified(), "/profile", &GateConfig::default());
    assert_eq!(target.as_deref(), Some("/auth/verify"));
}

#[test]
fn redirect_to_privileged_on_role_mismatch() {
    let state = state(SessionPhase::Checked, login(AccountStatus::Verified, Some("USER")));
    let req = RouteRequirement::protected_page(Some("ADMIN"));
    let target = redirect_target(&state, &req, "/admin", &GateConfig::default());
    assert_eq!(target.as_deref(), Some("/auth/privileged"));
}

#[test]
fn no_redirect_when_allowed() {
    let state = state(SessionPhase::Checked, login(AccountStatus::Verified, Some("ADMIN")));
    let req = RouteRequirement::protected_page(Some("ADMIN"));
    assert_eq!(redirect_target(&state, &req, "/admin", &GateConfig::default()), None);
}

// =============================================================================
// Sign-out
// =============================================================================

#[test]
fn no_redirect_while_sign_out_is_in_flight() {
    let signed_in = state(SessionPhase::Checked, login(AccountStatus::Verified, None));
    let leaving = signed_in.apply(SessionEvent::SignOutStarted);
    assert_eq!(redirect_target(&leaving, &RouteRequirement::verified(), "/profile", &GateConfig::default()), None);
}

#[test]
fn sign_out_without_browser_clears_session() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(state(SessionPhase::Checked, login(AccountStatus::Verified, Some("ADMIN"))));

    sign_out(auth);

    let after = auth.get_untracked();
    assert!(!after.loading());
    assert!(!after.signed_in());
    assert_eq!(after.login(), &LoginState::signed_out());
}
