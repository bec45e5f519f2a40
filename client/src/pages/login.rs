//! Auth status page: ORCID sign-in, e-mail sign-up, and callback outcomes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/auth/{status}`. The backend's ORCID callback lands on
//! `/auth/success` (or `/auth/error`) after setting the profile cookie, and
//! first-time users are sent to `/auth/signup` to register an e-mail.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::login_button::LoginButton;
use crate::state::auth::AuthState;
use crate::util::auth::refresh_profile;

const MAX_EMAIL_LEN: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatusView {
    SignIn,
    SignUp,
    Success,
    Error,
}

impl AuthStatusView {
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("signup") => Self::SignUp,
            Some("success") => Self::Success,
            Some("error") => Self::Error,
            _ => Self::SignIn,
        }
    }
}

/// Whether a visitor should be bounced to `/` instead of seeing this page.
///
/// Only applies once the session check has landed, so a signed-in user is
/// never bounced on a guess. Sign-up and the success callback stay reachable.
pub(crate) fn bounce_signed_in(view: AuthStatusView, state: &AuthState) -> bool {
    matches!(view, AuthStatusView::SignIn | AuthStatusView::Error) && state.signed_in()
}

/// Trim and check a sign-up e-mail address.
pub(crate) fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an e-mail address.");
    }
    if email.len() > MAX_EMAIL_LEN || !email.contains('@') {
        return Err("Enter a valid e-mail address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let view_kind = Memo::new(move |_| {
        params.with(|p| AuthStatusView::from_param(p.get("status").map(|s| s.to_string()).as_deref()))
    });

    // ORCID callback: the backend has just set the profile cookie.
    let navigate_success = navigate.clone();
    Effect::new(move || {
        if view_kind.get() == AuthStatusView::Success {
            refresh_profile(auth);
            navigate_success("/profile", NavigateOptions::default());
        }
    });

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if bounce_signed_in(view_kind.get(), &auth.get()) {
            navigate_home("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="login-page">
            {move || {
                let kind = view_kind.get();
                if bounce_signed_in(kind, &auth.get()) {
                    return ().into_any();
                }
                match kind {
                    AuthStatusView::SignUp => view! { <SignUpForm/> }.into_any(),
                    AuthStatusView::Success => {
                        view! { <p class="login-message">"Signing you in..."</p> }.into_any()
                    }
                    AuthStatusView::SignIn | AuthStatusView::Error => {
                        let failed = kind == AuthStatusView::Error;
                        view! { <SignInCard error=failed/> }.into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn SignInCard(error: bool) -> impl IntoView {
    view! {
        <div class="login-card">
            <Show when=move || error>
                <p class="login-message login-message--error">
                    "Sign-in failed. Please try again."
                </p>
            </Show>
            <h1>"Sign in with ORCID"</h1>
            <p class="login-card__subtitle">
                "Dataset records are attributed to your ORCID iD."
            </p>
            <LoginButton/>
            <p class="login-card__hint">
                "No ORCID iD yet? Register for free at orcid.org, then come back here."
            </p>
        </div>
    }
}

#[component]
fn SignUpForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_email_to_profile(&email_value).await {
                    Ok(()) => navigate("/auth/success", NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("e-mail registration failed: {e}");
                        info.set("Registration failed. Please try again.".to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value);
        }
    };

    view! {
        <div class="login-card">
            <h1>"Welcome"</h1>
            <p class="login-card__subtitle">"ORCID sign-in succeeded."</p>
            <p>"Register an e-mail address to finish creating your account."</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    maxlength="60"
                    placeholder="you@example.org"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <p class="login-card__hint">"We will send a verification link to this address."</p>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
