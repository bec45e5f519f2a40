//! Server-side access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page request passes through [`gate_requests`] before Leptos renders
//! it. The middleware resolves the caller's login from the profile cookie,
//! optionally confirming the session with the backend first, and answers
//! `307` to the redirect target when the route table denies the path. The
//! client repeats the same decision after hydration, so both sides agree.
//!
//! ERROR HANDLING
//! ==============
//! A failed backend check reads as signed out; the request is never failed
//! outright because the backend is unreachable.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use gate::http::HttpSessionApi;
use gate::profile::cached_login;
use gate::{GateConfig, GateError, LoginState, ProfileSource, RouteTable, SessionEvent, SessionGate};

use crate::config::ServerConfig;

/// Path prefixes served without consulting the gate.
const UNGATED_PREFIXES: &[&str] = &["/pkg/", "/healthz", "/favicon.ico"];

/// Profile record lookup over the request's parsed cookies.
pub struct JarProfileSource(pub CookieJar);

impl ProfileSource for JarProfileSource {
    fn profile_record(&self, name: &str) -> Option<String> {
        self.0
            .get(name)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Clone)]
pub struct GateState {
    inner: Arc<GateInner>,
}

struct GateInner {
    config: GateConfig,
    table: RouteTable,
    remote: Option<HttpSessionApi>,
}

impl GateState {
    /// Gate over the portal's route table.
    ///
    /// # Errors
    ///
    /// Returns an error if remote validation is on and the HTTP client cannot
    /// be built.
    pub fn new(config: &ServerConfig) -> Result<Self, GateError> {
        Self::with_table(config, RouteTable::portal_default())
    }

    /// Gate over a caller-supplied route table.
    ///
    /// # Errors
    ///
    /// See [`GateState::new`].
    pub fn with_table(config: &ServerConfig, table: RouteTable) -> Result<Self, GateError> {
        let remote = match (&config.gate.api_base_url, config.validate_remote) {
            (Some(_), true) => Some(HttpSessionApi::new(&config.gate)?),
            (None, true) => {
                tracing::warn!("GATE_VALIDATE_REMOTE set without API_BASE_URL; using cached profile only");
                None
            }
            (_, false) => None,
        };
        Ok(Self { inner: Arc::new(GateInner { config: config.gate.clone(), table, remote }) })
    }

    #[must_use]
    pub fn validates_remotely(&self) -> bool {
        self.inner.remote.is_some()
    }

    /// Login for this request: a backend check when configured, otherwise
    /// the cached profile cookie alone.
    async fn resolve_login(&self, jar: CookieJar, cookie_header: &str) -> LoginState {
        let profiles = JarProfileSource(jar);
        let Some(api) = &self.inner.remote else {
            return cached_login(&profiles, &self.inner.config.cookie_name);
        };

        let gate = SessionGate::new(api.with_cookie_header(cookie_header), profiles, &self.inner.config);
        match gate.check().await {
            SessionEvent::CheckSucceeded(login) => login,
            _ => LoginState::signed_out(),
        }
    }
}

fn is_ungated(path: &str) -> bool {
    UNGATED_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Axum middleware applying the route table to each page request.
pub async fn gate_requests(State(state): State<GateState>, jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if is_ungated(&path) || state.inner.table.requirement_for(&path).is_none() {
        return next.run(req).await;
    }

    let cookie_header = req
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let login = state.resolve_login(jar, &cookie_header).await;
    let decision = state.inner.table.evaluate(&path, &login, &state.inner.config.paths);

    match decision.redirect_to {
        Some(target) if !decision.allowed => {
            tracing::debug!(%path, %target, authenticated = login.authenticated, "gate redirect");
            Redirect::temporary(&target).into_response()
        }
        _ => next.run(req).await,
    }
}
