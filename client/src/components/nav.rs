//! Top navigation bar with session-aware sign-in / sign-out controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::gate_config;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn Nav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sign_in_path = gate_config().paths.sign_in;
    let sign_in_link = move || view! { <a href=sign_in_path.clone() class="nav__link">"Sign in"</a> };

    let label = move || {
        auth.with(|s| s.login().display_name().map(str::to_owned))
            .unwrap_or_default()
    };

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">"Metadata Portal"</a>
            <a href="/about" class="nav__link">"About"</a>
            // Nothing session-specific renders until the check lands.
            <Show when=move || !auth.with(AuthState::loading)>
                <Show
                    when=move || auth.with(AuthState::signed_in)
                    fallback=sign_in_link.clone()
                >
                    <a href="/profile" class="nav__link">{label}</a>
                    <SignOutButton class="nav__link"/>
                </Show>
            </Show>
        </nav>
    }
}

/// Returns to the landing page and signs out.
#[component]
pub fn SignOutButton(#[prop(into)] class: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        navigate("/", NavigateOptions::default());
        sign_out(auth);
    };

    view! {
        <button class=class on:click=on_sign_out>"Sign out"</button>
    }
}
