//! ORCID sign-in button.

use leptos::prelude::*;

use crate::net::api::gate_config;

/// Link-style button that starts the backend's ORCID flow.
#[component]
pub fn LoginButton(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let href = gate_config().orcid_sign_in_url();
    let label = label.unwrap_or_else(|| "Sign in with ORCID".to_owned());

    view! {
        <a href=href class="login-button" rel="external">
            {label}
        </a>
    }
}
