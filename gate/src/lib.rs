//! # gate
//!
//! Session gate shared by the portal's Leptos client and its Axum host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal never owns a session itself. A remote backend validates the
//! browser session, and a cookie set by that backend carries a JSON copy of the
//! user's profile. This crate turns those two inputs into a [`LoginState`]
//! snapshot and decides, per route, whether a page renders or redirects.
//!
//! DESIGN
//! ======
//! Decisions are pure functions of `(LoginState, RouteRequirement, path)`.
//! Navigation is left to callers: the client navigates through
//! `leptos_router`, the server answers with an HTTP redirect.

pub mod access;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod login;
pub mod profile;
pub mod routes;
pub mod session;

pub use access::{AccessDecision, RedirectPaths, RouteRequirement, evaluate_access};
pub use config::GateConfig;
pub use error::GateError;
pub use login::{AccountStatus, LoginState};
pub use profile::{CookieHeaderSource, ProfileSource};
pub use routes::{RouteClass, RouteTable};
pub use session::{GateOutcome, SessionApi, SessionEvent, SessionGate, SessionPhase, SessionSnapshot};
