//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read the auth session from context and never fetch on their
//! own; pages decide when network calls happen.

pub mod login_button;
pub mod nav;
pub mod route_guard;
