//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one [`ServerConfig`]
//! before binding. The embedded [`GateConfig`] is shared with the gate
//! middleware so both sides agree on cookie name and redirect paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use gate::{GateConfig, GateError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    Port(String),
    #[error(transparent)]
    Gate(#[from] GateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Run the backend validate call on each gated request.
    pub validate_remote: bool,
    pub gate: GateConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GATE_VALIDATE_REMOTE`: `1/true/yes/on` or `0/false/no/off`, default off
    /// - everything [`GateConfig::from_env`] reads
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port or the gate config is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Port(raw))?,
            None => DEFAULT_PORT,
        };
        let validate_remote = match lookup("GATE_VALIDATE_REMOTE") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unrecognized GATE_VALIDATE_REMOTE; remote validation off");
                false
            }),
            None => false,
        };
        let gate = GateConfig::from_lookup(&lookup)?;

        Ok(Self { port, validate_remote, gate })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
