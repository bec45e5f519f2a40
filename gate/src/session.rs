//! Session check state machine.
//!
//! ARCHITECTURE
//! ============
//! A session moves `Unchecked -> Checking -> Checked`. The check calls the
//! backend's validate endpoint and, on success, hydrates the profile from the
//! locally cached record. Sign-out sends the machine back through `Checking`
//! while the backend invalidates, then lands in `Checked` signed out.
//!
//! Snapshots are immutable: [`SessionSnapshot::apply`] returns a new value
//! for every event, so consumers holding an older snapshot never observe a
//! half-applied transition.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures are absorbed here. A failed check reads as "not signed in";
//! a failed invalidate still clears local state. Neither is retried.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::access::{AccessDecision, RedirectPaths, RouteRequirement, evaluate_access};
use crate::config::GateConfig;
use crate::error::GateError;
use crate::login::LoginState;
use crate::profile::{self, ProfileSource};

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No check issued yet.
    #[default]
    Unchecked,
    /// A validate or invalidate call is in flight. Render nothing.
    Checking,
    /// The login snapshot is authoritative for this page load.
    Checked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    CheckStarted,
    /// Validation succeeded; carries the login hydrated from the cached record.
    CheckSucceeded(LoginState),
    CheckFailed,
    SignOutStarted,
    SignedOut,
    /// Explicit replacement of the profile, e.g. after the ORCID callback.
    ProfileUpdated(LoginState),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub login: LoginState,
}

/// Result of consulting the gate for one page render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session not checked yet: render nothing and do not redirect.
    Pending,
    Decided(AccessDecision),
}

impl GateOutcome {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Decided(d) if d.allowed)
    }

    /// Redirect target once decided, `None` while pending or allowed.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Decided(d) => d.redirect_to.as_deref(),
            Self::Pending => None,
        }
    }
}

impl SessionSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the snapshot that follows `event`.
    #[must_use]
    pub fn apply(&self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::CheckStarted => Self { phase: SessionPhase::Checking, login: self.login.clone() },
            SessionEvent::CheckSucceeded(login) => Self { phase: SessionPhase::Checked, login },
            SessionEvent::CheckFailed | SessionEvent::SignedOut => {
                Self { phase: SessionPhase::Checked, login: LoginState::signed_out() }
            }
            SessionEvent::SignOutStarted => match self.phase {
                SessionPhase::Checked => Self { phase: SessionPhase::Checking, login: self.login.clone() },
                SessionPhase::Unchecked | SessionPhase::Checking => self.clone(),
            },
            SessionEvent::ProfileUpdated(login) => Self { phase: self.phase, login },
        }
    }

    /// Whether a session check should be started.
    #[must_use]
    pub fn needs_check(&self) -> bool {
        self.phase == SessionPhase::Unchecked
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.phase == SessionPhase::Checked
    }

    /// Evaluate `requirement` for `path`, or `Pending` until the check lands.
    #[must_use]
    pub fn gate(&self, requirement: &RouteRequirement, path: &str, paths: &RedirectPaths) -> GateOutcome {
        if self.is_checked() {
            GateOutcome::Decided(evaluate_access(&self.login, requirement, path, paths))
        } else {
            GateOutcome::Pending
        }
    }
}

// =============================================================================
// REMOTE API
// =============================================================================

/// Backend session endpoints consumed by the gate.
///
/// Only success or failure matters; response bodies are not read.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SessionApi {
    /// Confirm a valid server-side session exists.
    async fn validate_session(&self) -> Result<(), GateError>;

    /// Best-effort server-side session teardown.
    async fn invalidate_session(&self) -> Result<(), GateError>;
}

// =============================================================================
// DRIVER
// =============================================================================

/// Runs checks and sign-outs against a [`SessionApi`] and a [`ProfileSource`].
pub struct SessionGate<A, P> {
    api: A,
    profiles: P,
    cookie_name: String,
}

impl<A, P> SessionGate<A, P>
where
    A: SessionApi,
    P: ProfileSource,
{
    #[must_use]
    pub fn new(api: A, profiles: P, config: &GateConfig) -> Self {
        Self { api, profiles, cookie_name: config.cookie_name.clone() }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Validate the session and resolve it to a terminal event.
    ///
    /// Success hydrates the login from the cached record, which may still be
    /// signed out when the record is missing or carries no e-mail.
    pub async fn check(&self) -> SessionEvent {
        match self.api.validate_session().await {
            Ok(()) => {
                let login = self.cached_login();
                tracing::debug!(authenticated = login.authenticated, "session check succeeded");
                SessionEvent::CheckSucceeded(login)
            }
            Err(e) => {
                tracing::debug!(error = %e, code = e.error_code(), "session check failed; treating as signed out");
                SessionEvent::CheckFailed
            }
        }
    }

    /// Invalidate the backend session. Local state clears either way.
    pub async fn sign_out(&self) -> SessionEvent {
        if let Err(e) = self.api.invalidate_session().await {
            tracing::warn!(error = %e, "session invalidate failed; clearing local state anyway");
        }
        SessionEvent::SignedOut
    }

    /// Run a full check starting from `current`.
    pub async fn run_check(&self, current: &SessionSnapshot) -> SessionSnapshot {
        let checking = current.apply(SessionEvent::CheckStarted);
        checking.apply(self.check().await)
    }

    /// Run a full sign-out starting from `current`.
    pub async fn run_sign_out(&self, current: &SessionSnapshot) -> SessionSnapshot {
        let checking = current.apply(SessionEvent::SignOutStarted);
        checking.apply(self.sign_out().await)
    }

    /// Decode the cached profile record without contacting the backend.
    #[must_use]
    pub fn cached_login(&self) -> LoginState {
        profile::cached_login(&self.profiles, &self.cookie_name)
    }
}
