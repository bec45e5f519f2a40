//! Declarative path-prefix route classification.
//!
//! DESIGN
//! ======
//! Classification is one ordered table of `(prefix, class)` pairs, evaluated
//! top to bottom. Matching respects path segments, so `/profile` covers
//! `/profile` and `/profile/edit` but not `/profiles`, and the root entry `/`
//! covers only the landing page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::access::{AccessDecision, RedirectPaths, RouteRequirement, evaluate_access};
use crate::login::LoginState;

/// How a matched path is treated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Always allowed.
    Public,
    /// Allowed only when the requirement holds.
    Protected(RouteRequirement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RouteEntry {
    prefix: String,
    class: RouteClass,
}

/// Ordered prefix table. Paths matching no entry are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

const PUBLIC_PREFIXES: &[&str] = &[
    "/",
    "/about",
    "/docs",
    "/auth/signin",
    "/auth/signup",
    "/auth/verify",
    "/auth/verified",
    "/auth/token-expired",
    "/auth/error",
    "/auth/success",
    "/auth/privileged",
];

const PROTECTED_PREFIXES: &[&str] = &["/profile", "/dataset/new", "/dataset/list"];

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The portal's route table: landing, docs and auth pages are public;
    /// profile and dataset authoring require a verified account.
    #[must_use]
    pub fn portal_default() -> Self {
        let table = PUBLIC_PREFIXES.iter().fold(Self::new(), |t, p| t.public(*p));
        PROTECTED_PREFIXES
            .iter()
            .fold(table, |t, p| t.protected(*p, RouteRequirement::verified()))
    }

    #[must_use]
    pub fn public(self, prefix: impl Into<String>) -> Self {
        self.entry(prefix, RouteClass::Public)
    }

    #[must_use]
    pub fn protected(self, prefix: impl Into<String>, requirement: RouteRequirement) -> Self {
        self.entry(prefix, RouteClass::Protected(requirement))
    }

    #[must_use]
    pub fn entry(mut self, prefix: impl Into<String>, class: RouteClass) -> Self {
        self.entries.push(RouteEntry { prefix: normalize_prefix(prefix.into()), class });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose prefix covers `path`, if any.
    #[must_use]
    pub fn classify(&self, path: &str) -> Option<&RouteClass> {
        let path = strip_query(path);
        self.entries
            .iter()
            .find(|e| prefix_matches(&e.prefix, path))
            .map(|e| &e.class)
    }

    /// Requirement governing `path`, or `None` when it is public or unmatched.
    #[must_use]
    pub fn requirement_for(&self, path: &str) -> Option<&RouteRequirement> {
        match self.classify(path) {
            Some(RouteClass::Protected(req)) => Some(req),
            Some(RouteClass::Public) | None => None,
        }
    }

    /// Evaluate `login` against whatever entry covers `path`.
    #[must_use]
    pub fn evaluate(&self, path: &str, login: &LoginState, paths: &RedirectPaths) -> AccessDecision {
        match self.requirement_for(path) {
            Some(req) => evaluate_access(login, req, path, paths),
            None => AccessDecision::allow(),
        }
    }
}

fn normalize_prefix(prefix: String) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/" || path.is_empty();
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
