//! Gate configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::access::RedirectPaths;
use crate::error::GateError;

pub const DEFAULT_COOKIE_NAME: &str = "auth_token";
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 8000;

/// Backend auth endpoints, relative to the API base URL.
pub const VALIDATE_PATH: &str = "/auth";
pub const INVALIDATE_PATH: &str = "/auth/invalidate";
pub const PROFILE_EMAIL_PATH: &str = "/auth/profile";
pub const PROFILE_RESET_PATH: &str = "/auth/profile/reset";
pub const REQUEST_TOKEN_PATH: &str = "/auth/token/email";
pub const ORCID_PATH: &str = "/auth/orcid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Cookie/record holding the cached JSON profile.
    pub cookie_name: String,
    /// Backend base URL without trailing slash; `None` means same origin.
    pub api_base_url: Option<String>,
    pub http_timeout_ms: u64,
    pub paths: RedirectPaths,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            api_base_url: None,
            http_timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            paths: RedirectPaths::default(),
        }
    }
}

impl GateConfig {
    /// Build typed gate config from environment variables.
    ///
    /// Optional:
    /// - `AUTH_COOKIE`: profile cookie name, default `auth_token`
    /// - `API_BASE_URL`: backend base URL
    /// - `HTTP_TIMEOUT_MS`: default 8000
    /// - `GATE_SIGNIN_PATH`, `GATE_VERIFY_PATH`, `GATE_PRIVILEGED_PATH`
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_TIMEOUT_MS` is not a positive integer or a
    /// redirect path does not start with `/`.
    pub fn from_env() -> Result<Self, GateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GateConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`GateConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let cookie_name = non_empty("AUTH_COOKIE").unwrap_or(defaults.cookie_name);
        let api_base_url = non_empty("API_BASE_URL").map(|url| url.trim_end_matches('/').to_owned());
        let http_timeout_ms = match non_empty("HTTP_TIMEOUT_MS") {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.http_timeout_ms,
        };
        let paths = RedirectPaths {
            sign_in: parse_path("GATE_SIGNIN_PATH", non_empty("GATE_SIGNIN_PATH"), defaults.paths.sign_in)?,
            verify: parse_path("GATE_VERIFY_PATH", non_empty("GATE_VERIFY_PATH"), defaults.paths.verify)?,
            privileged: parse_path(
                "GATE_PRIVILEGED_PATH",
                non_empty("GATE_PRIVILEGED_PATH"),
                defaults.paths.privileged,
            )?,
        };

        Ok(Self { cookie_name, api_base_url, http_timeout_ms, paths })
    }

    /// Absolute URL for a backend endpoint path such as `/auth`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        match &self.api_base_url {
            Some(base) => format!("{base}{path}"),
            None => path.to_owned(),
        }
    }

    /// Backend URL that starts the ORCID sign-in flow.
    #[must_use]
    pub fn orcid_sign_in_url(&self) -> String {
        self.endpoint(ORCID_PATH)
    }
}

fn parse_timeout(raw: &str) -> Result<u64, GateError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(GateError::Config(format!("invalid HTTP_TIMEOUT_MS: {raw}"))),
        Ok(ms) => Ok(ms),
    }
}

fn parse_path(key: &str, raw: Option<String>, default: String) -> Result<String, GateError> {
    match raw {
        Some(path) if path.starts_with('/') => Ok(path),
        Some(path) => Err(GateError::Config(format!("{key} must start with '/': {path}"))),
        None => Ok(default),
    }
}
