//! Errors produced by gate configuration and remote session calls.
//!
//! None of these reach the user: a failed check reads as "signed out" and a
//! failed sign-out is ignored. They exist so callers can log what happened.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("session request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("session request rejected: status {status}")]
    Rejected { status: u16 },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl GateError {
    /// Stable machine-readable code for log fields.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E_CONFIG_PARSE",
            Self::Transport(_) => "E_SESSION_TRANSPORT",
            Self::Rejected { .. } => "E_SESSION_REJECTED",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// The gate itself never retries; this only informs callers that choose to.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Rejected { status: 429 | 500..=599 })
    }
}
