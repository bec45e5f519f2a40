//! REST API helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending cookies so
//! the backend sees the browser's session.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth failures degrade UI
//! behavior without crashing hydration. The session gate turns validate and
//! invalidate failures into "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use std::future::Future;

#[cfg(any(test, feature = "hydrate"))]
use futures::future::{Either, select};
use gate::config::{INVALIDATE_PATH, PROFILE_EMAIL_PATH, PROFILE_RESET_PATH, REQUEST_TOKEN_PATH, VALIDATE_PATH};
use gate::{GateConfig, GateError, SessionApi};

/// Gate configuration baked in at build time.
///
/// `API_BASE_URL` and `AUTH_COOKIE` are read from the build environment; the
/// browser has no process environment of its own.
#[must_use]
pub fn gate_config() -> GateConfig {
    config_from(option_env!("API_BASE_URL"), option_env!("AUTH_COOKIE"))
}

fn config_from(api_base_url: Option<&str>, cookie_name: Option<&str>) -> GateConfig {
    GateConfig::from_lookup(|key| match key {
        "API_BASE_URL" => api_base_url.map(str::to_owned),
        "AUTH_COOKIE" => cookie_name.map(str::to_owned),
        _ => None,
    })
    .unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(status: u16) -> Result<(), GateError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(GateError::Rejected { status }) }
}

/// Resolve `request`, or fail with a transport error once `expiry` fires.
#[cfg(any(test, feature = "hydrate"))]
async fn with_timeout<R, E>(request: R, expiry: E) -> Result<(), GateError>
where
    R: Future<Output = Result<(), GateError>>,
    E: Future<Output = ()>,
{
    let request = std::pin::pin!(request);
    let expiry = std::pin::pin!(expiry);
    match select(request, expiry).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(GateError::Transport("timeout".to_owned())),
    }
}

async fn post_auth(path: &str, body: serde_json::Value) -> Result<(), GateError> {
    #[cfg(feature = "hydrate")]
    {
        let config = gate_config();
        let url = config.endpoint(path);
        let request = async move {
            let resp = gloo_net::http::Request::post(&url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(&body)
                .map_err(|e| GateError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| GateError::Transport(e.to_string()))?;
            status_result(resp.status())
        };
        let expiry = gloo_timers::future::sleep(std::time::Duration::from_millis(config.http_timeout_ms));
        with_timeout(request, expiry).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(GateError::Transport("not available on server".to_owned()))
    }
}

/// Session endpoints as seen from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionApi;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl SessionApi for BrowserSessionApi {
    async fn validate_session(&self) -> Result<(), GateError> {
        post_auth(VALIDATE_PATH, serde_json::json!({})).await
    }

    async fn invalidate_session(&self) -> Result<(), GateError> {
        post_auth(INVALIDATE_PATH, serde_json::json!({})).await
    }
}

/// Register an e-mail address on the signed-in profile via `POST /auth/profile`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn add_email_to_profile(email: &str) -> Result<(), GateError> {
    post_auth(PROFILE_EMAIL_PATH, serde_json::json!({ "email": email })).await
}

/// Reset the registered e-mail via `POST /auth/profile/reset`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn reset_email() -> Result<(), GateError> {
    post_auth(PROFILE_RESET_PATH, serde_json::json!({})).await
}

/// Request a new verification link via `POST /auth/token/email`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn request_token() -> Result<(), GateError> {
    post_auth(REQUEST_TOKEN_PATH, serde_json::json!({})).await
}
