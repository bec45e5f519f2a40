//! Static landing pages for the backend's e-mail link outcomes.
//!
//! The verification e-mail links back to `/auth/verified` on success and to
//! `/auth/token-expired` when the link is stale. Neither needs a session.

use leptos::prelude::*;

use crate::net::api::gate_config;

#[component]
pub fn VerifiedPage() -> impl IntoView {
    let sign_in_path = gate_config().paths.sign_in;

    view! {
        <div class="login-card">
            <h1>"Welcome"</h1>
            <p>"Your e-mail address is verified."</p>
            <a href=sign_in_path class="login-button">"Go to sign in"</a>
        </div>
    }
}

#[component]
pub fn TokenExpiredPage() -> impl IntoView {
    let sign_in_path = gate_config().paths.sign_in;

    view! {
        <div class="login-card">
            <h1>"This link has expired"</h1>
            <p>
                <a href=sign_in_path>"Sign in"</a>
                " again to request a new verification link."
            </p>
        </div>
    }
}
