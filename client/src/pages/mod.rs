//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth_notice;
pub mod home;
pub mod login;
pub mod privileged;
pub mod profile;
pub mod verify;
