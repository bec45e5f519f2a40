//! Backend session API over HTTP, for native callers such as the SSR host.
//!
//! The browser build talks to the same endpoints through its own fetch-based
//! implementation, which also owns the profile endpoints. This one forwards
//! the browser's `Cookie` header so the backend sees the same session the
//! browser holds.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::header::COOKIE;

use crate::config::{GateConfig, INVALIDATE_PATH, VALIDATE_PATH};
use crate::error::GateError;
use crate::session::SessionApi;

#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    client: reqwest::Client,
    base_url: String,
    cookie: Option<String>,
}

impl HttpSessionApi {
    /// Build a client for the backend named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is unset or the HTTP client fails to build.
    pub fn new(config: &GateConfig) -> Result<Self, GateError> {
        let base_url = config
            .api_base_url
            .clone()
            .ok_or_else(|| GateError::Config("API_BASE_URL is required for the HTTP session API".into()))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .map_err(|e| GateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { client, base_url, cookie: None })
    }

    /// Copy of this client that sends `header` as the request `Cookie`.
    #[must_use]
    pub fn with_cookie_header(&self, header: impl Into<String>) -> Self {
        let header = header.into();
        Self { cookie: (!header.is_empty()).then_some(header), ..self.clone() }
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<(), GateError> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.client.post(&url).json(body);
        if let Some(cookie) = &self.cookie {
            req = req.header(COOKIE, cookie);
        }

        let resp = req.send().await.map_err(|e| GateError::Transport(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(%url, status = status.as_u16(), "backend rejected auth request");
            Err(GateError::Rejected { status: status.as_u16() })
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl SessionApi for HttpSessionApi {
    async fn validate_session(&self) -> Result<(), GateError> {
        self.post(VALIDATE_PATH, &serde_json::json!({})).await
    }

    async fn invalidate_session(&self) -> Result<(), GateError> {
        self.post(INVALIDATE_PATH, &serde_json::json!({})).await
    }
}
