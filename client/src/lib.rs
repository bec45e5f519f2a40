//! # client
//!
//! Leptos + WASM frontend for the dataset metadata portal.
//!
//! This crate holds the pages, components, and browser plumbing around the
//! `gate` crate's session state machine: one session check per page load,
//! then per-page access decisions that either render the page or redirect.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
