//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the auth endpoints the session gate and auth pages call.

pub mod api;
