//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The value lives in a `RwSignal` provided
//! via context; every transition replaces it with a freshly reduced snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{LoginState, SessionEvent, SessionSnapshot};

/// Authentication state tracking the session phase and the login snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionSnapshot,
}

impl AuthState {
    #[must_use]
    pub fn login(&self) -> &LoginState {
        &self.session.login
    }

    /// True until the first session check has resolved, and while a
    /// sign-out is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        !self.session.is_checked()
    }

    /// Signed in as far as the UI is concerned. Always false while loading.
    #[must_use]
    pub fn signed_in(&self) -> bool {
        !self.loading() && self.session.login.authenticated
    }

    #[must_use]
    pub fn apply(&self, event: SessionEvent) -> Self {
        Self { session: self.session.apply(event) }
    }
}
