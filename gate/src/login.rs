//! Client-held snapshot of the current user's authentication and profile.
//!
//! DESIGN
//! ======
//! `LoginState` is a value, not a handle. Every check, sign-out or profile
//! update builds a fresh one; nothing edits fields of a live snapshot.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account verification status reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    /// E-mail confirmed through the verification flow.
    Verified,
    /// E-mail registered but not yet confirmed.
    NotVerified,
    /// Any status string this client does not know about.
    Other(String),
}

impl AccountStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verified => "VERIFIED",
            Self::NotVerified => "NOT_VERIFIED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AccountStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "VERIFIED" => Self::Verified,
            "NOT_VERIFIED" => Self::NotVerified,
            _ => Self::Other(raw),
        }
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        match status {
            AccountStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Authentication snapshot for the current visitor.
///
/// `authenticated` is never set directly by callers; it is derived from the
/// presence of a non-empty `email` in the cached profile record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub authenticated: bool,
    pub orcid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub status: Option<AccountStatus>,
}

impl LoginState {
    /// The cleared, unauthenticated state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Normalize a decoded profile record.
    ///
    /// Anything that is not a JSON object, and any field that is not a
    /// string, contributes nothing.
    #[must_use]
    pub fn from_record(record: &Value) -> Self {
        let field = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_owned);

        let email = field("email");
        let authenticated = email.as_deref().is_some_and(|e| !e.is_empty());

        Self {
            authenticated,
            orcid: field("orcid"),
            name: field("name"),
            email,
            organization: field("organization"),
            role: field("role"),
            status: field("status").map(AccountStatus::from),
        }
    }

    /// Decode a raw profile record (the cookie value) into a snapshot.
    ///
    /// Malformed JSON yields the signed-out state.
    #[must_use]
    pub fn from_record_str(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(record) => Self::from_record(&record),
            Err(e) => {
                tracing::debug!(error = %e, "profile record is not valid JSON");
                Self::signed_out()
            }
        }
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self.status, Some(AccountStatus::Verified))
    }

    /// Display label for headers and menus: name, then e-mail, then ORCID iD.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [&self.name, &self.email, &self.orcid]
            .into_iter()
            .find_map(|v| v.as_deref().filter(|s| !s.is_empty()))
    }
}
