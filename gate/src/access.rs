//! Per-route access policy and its evaluation.
//!
//! ARCHITECTURE
//! ============
//! `evaluate_access` only computes a decision. Callers perform the navigation
//! and must keep protected content unrendered until it completes.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::collections::BTreeSet;

use crate::login::LoginState;

pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/signin";
pub const DEFAULT_VERIFY_PATH: &str = "/auth/verify";
pub const DEFAULT_PRIVILEGED_PATH: &str = "/auth/privileged";

/// Fixed redirect targets consulted by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectPaths {
    pub sign_in: String,
    pub verify: String,
    pub privileged: String,
}

impl Default for RedirectPaths {
    fn default() -> Self {
        Self {
            sign_in: DEFAULT_SIGN_IN_PATH.to_owned(),
            verify: DEFAULT_VERIFY_PATH.to_owned(),
            privileged: DEFAULT_PRIVILEGED_PATH.to_owned(),
        }
    }
}

/// Access requirement declared by a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    pub require_auth: bool,
    pub require_verified: bool,
    /// Acceptable roles; empty means any role (or none) is fine.
    pub require_role: BTreeSet<String>,
    /// Replaces the sign-in target when authentication is missing.
    pub redirect_to: Option<String>,
}

impl Default for RouteRequirement {
    fn default() -> Self {
        Self::authenticated()
    }
}

impl RouteRequirement {
    /// No requirement at all.
    #[must_use]
    pub fn public() -> Self {
        Self { require_auth: false, require_verified: false, require_role: BTreeSet::new(), redirect_to: None }
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self { require_auth: true, ..Self::public() }
    }

    /// Authenticated with a confirmed e-mail.
    #[must_use]
    pub fn verified() -> Self {
        Self { require_verified: true, ..Self::authenticated() }
    }

    /// Page-level protection: signed in, verified, and optionally one role.
    #[must_use]
    pub fn protected_page(role: Option<&str>) -> Self {
        match role {
            Some(role) => Self::verified().with_roles([role]),
            None => Self::verified(),
        }
    }

    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require_role = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

/// Outcome of evaluating one requirement against one login snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub redirect_to: Option<String>,
}

impl AccessDecision {
    #[must_use]
    pub fn allow() -> Self {
        Self { allowed: true, redirect_to: None }
    }

    #[must_use]
    pub fn redirect(path: impl Into<String>) -> Self {
        Self { allowed: false, redirect_to: Some(path.into()) }
    }
}

/// Decide whether `login` may view `current_path` under `requirement`.
///
/// Rules are checked in order and the first failing one picks the redirect:
/// authentication, then verification, then role membership.
#[must_use]
pub fn evaluate_access(
    login: &LoginState,
    requirement: &RouteRequirement,
    current_path: &str,
    paths: &RedirectPaths,
) -> AccessDecision {
    let decision = if requirement.require_auth && !login.authenticated {
        AccessDecision::redirect(requirement.redirect_to.as_deref().unwrap_or(&paths.sign_in))
    } else if requirement.require_verified && !login.is_verified() {
        AccessDecision::redirect(&paths.verify)
    } else if !requirement.require_role.is_empty()
        && !login.role.as_ref().is_some_and(|role| requirement.require_role.contains(role))
    {
        AccessDecision::redirect(&paths.privileged)
    } else {
        AccessDecision::allow()
    };

    tracing::trace!(
        path = %current_path,
        allowed = decision.allowed,
        redirect = ?decision.redirect_to,
        "access evaluated"
    );
    decision
}
