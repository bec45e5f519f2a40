//! Locally cached profile record lookup.
//!
//! The backend stores a JSON copy of the signed-in user's profile in a named
//! cookie. Browsers expose it through `document.cookie`, servers through the
//! request `Cookie` header; both are the same `name=value; ...` list.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use cookie::Cookie;

use crate::login::LoginState;

/// Source of the raw profile record stored under a cookie/record name.
pub trait ProfileSource {
    /// Raw record value, already percent-decoded, or `None` when absent.
    fn profile_record(&self, name: &str) -> Option<String>;
}

/// Reads the record from a `Cookie` header (or `document.cookie`) string.
#[derive(Clone, Debug, Default)]
pub struct CookieHeaderSource {
    header: String,
}

impl CookieHeaderSource {
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }
}

impl ProfileSource for CookieHeaderSource {
    fn profile_record(&self, name: &str) -> Option<String> {
        cookie_value(&self.header, name)
    }
}

/// A fixed record, or none. Used where no cookie store exists (SSR, tests).
#[derive(Clone, Debug, Default)]
pub struct StaticProfileSource(pub Option<String>);

impl ProfileSource for StaticProfileSource {
    fn profile_record(&self, _name: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Find `name` in a cookie list and return its decoded value.
///
/// Malformed pairs are skipped. When a name repeats, the first wins, matching
/// how browsers order more specific paths first.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Decode the record stored under `name`, signed out when it is missing.
#[must_use]
pub fn cached_login<P: ProfileSource + ?Sized>(source: &P, name: &str) -> LoginState {
    source
        .profile_record(name)
        .map_or_else(LoginState::signed_out, |raw| LoginState::from_record_str(&raw))
}
