//! Profile page for the signed-in, verified user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use gate::LoginState;
use leptos::prelude::*;

use crate::components::nav::SignOutButton;
use crate::components::route_guard::use_protected_route;
use crate::state::auth::AuthState;

/// Label/value rows shown on the profile card, skipping absent fields.
pub(crate) fn profile_rows(login: &LoginState) -> Vec<(&'static str, String)> {
    [
        ("ORCID iD", login.orcid.clone()),
        ("Name", login.name.clone()),
        ("E-mail", login.email.clone()),
        ("Organization", login.organization.clone()),
        ("Role", login.role.clone()),
        ("Status", login.status.as_ref().map(|s| s.as_str().to_owned())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
    .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let allowed = use_protected_route(None);

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="profile-page__pending">"Checking your session..."</p> }
        >
            <ProfileCard/>
        </Show>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__fields">
                {move || {
                    auth.with(|s| profile_rows(s.login()))
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()
                }}
            </dl>
            <SignOutButton class="login-button"/>
        </div>
    }
}
