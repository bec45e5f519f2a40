//! E-mail verification prompt.
//!
//! Shown to signed-in users whose account status is not yet `VERIFIED`.
//! Offers a fresh verification link, or resetting the registered address,
//! which signs the user out locally and returns them to sign-in. Both
//! actions need a live session, so visitors who are not signed in are sent
//! to sign-in first.

use gate::RouteRequirement;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::RouteGuard;
use crate::net::api::gate_config;
use crate::state::auth::AuthState;

#[component]
pub fn VerifyPage() -> impl IntoView {
    view! {
        <RouteGuard requirement=RouteRequirement::authenticated()>
            <VerifyPrompt/>
        </RouteGuard>
    }
}

#[component]
fn VerifyPrompt() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let sign_in_path = gate_config().paths.sign_in;

    let on_send_link = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_token().await {
                Ok(()) => {
                    sent.set(true);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("verification link request failed: {e}");
                    error.set(Some("Something went wrong. Please try again."));
                }
            }
        });
    };

    let on_reset = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let sign_in_path = sign_in_path.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_email().await {
                    Ok(()) => {
                        navigate(&sign_in_path, leptos_router::NavigateOptions::default());
                        crate::util::auth::dispatch(
                            auth,
                            gate::SessionEvent::ProfileUpdated(gate::LoginState::signed_out()),
                        );
                    }
                    Err(e) => {
                        log::warn!("e-mail reset failed: {e}");
                        error.set(Some("Something went wrong. Please try again."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &sign_in_path, auth);
        }
    };

    view! {
        <div class="verify-page">
            <h1>"Please verify your e-mail"</h1>
            <p>"You must confirm your e-mail address before registering datasets."</p>
            <p class="verify-page__status">
                {move || {
                    if sent.get() {
                        "A new verification link is on its way."
                    } else {
                        "Didn't receive the link? Request a new one below."
                    }
                }}
            </p>
            <Show when=move || error.get().is_some()>
                <p class="login-message login-message--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <div class="verify-page__actions">
                <a href="/" class="login-button">"Home"</a>
                <Show when=move || !sent.get()>
                    <button class="login-button" on:click=on_send_link>"Send new link"</button>
                </Show>
                <button class="login-button login-button--secondary" on:click=on_reset>
                    "Use a different e-mail"
                </button>
            </div>
        </div>
    }
}
