//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: nothing happens until
//! the session check lands, then the gate's decision picks the target. The
//! session check itself starts once, from the root component.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{GateConfig, RouteRequirement, SessionEvent, SessionGate};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{BrowserSessionApi, gate_config};
use crate::state::auth::AuthState;
use crate::util::cookie::DocumentCookieSource;

pub type BrowserGate = SessionGate<BrowserSessionApi, DocumentCookieSource>;

#[must_use]
pub fn browser_gate() -> BrowserGate {
    SessionGate::new(BrowserSessionApi, DocumentCookieSource, &gate_config())
}

/// Where `state` must be sent for `path`, once the check has resolved.
pub fn redirect_target(
    state: &AuthState,
    requirement: &RouteRequirement,
    path: &str,
    config: &GateConfig,
) -> Option<String> {
    state
        .session
        .gate(requirement, path, &config.paths)
        .redirect_to()
        .map(str::to_owned)
}

/// Replace the auth snapshot with the one that follows `event`.
pub fn dispatch(auth: RwSignal<AuthState>, event: SessionEvent) {
    let next = auth.with_untracked(|s| s.apply(event));
    auth.set(next);
}

/// Kick off the session check if it has not run yet.
pub fn start_session_check(auth: RwSignal<AuthState>) {
    if !auth.with_untracked(|s| s.session.needs_check()) {
        return;
    }
    dispatch(auth, SessionEvent::CheckStarted);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let event = browser_gate().check().await;
        dispatch(auth, event);
    });
}

/// Sign out against the backend. Local state clears whether or not the
/// backend call succeeds.
///
/// Callers leave the current page before calling this: guards stay quiet
/// while the sign-out is in flight, so the only navigation is the caller's.
pub fn sign_out(auth: RwSignal<AuthState>) {
    dispatch(auth, SessionEvent::SignOutStarted);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let event = browser_gate().sign_out().await;
        dispatch(auth, event);
    });
    #[cfg(not(feature = "hydrate"))]
    dispatch(auth, SessionEvent::SignedOut);
}

/// Re-read the cached profile cookie into the snapshot.
pub fn refresh_profile(auth: RwSignal<AuthState>) {
    dispatch(auth, SessionEvent::ProfileUpdated(browser_gate().cached_login()));
}

/// Redirect whenever the checked session fails `requirement` on the current path.
pub fn install_access_redirect<F>(auth: RwSignal<AuthState>, requirement: RouteRequirement, path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let config = gate_config();
    Effect::new(move || {
        let state = auth.get();
        let path = path.get();
        if let Some(target) = redirect_target(&state, &requirement, &path, &config) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
