//! Landing page.

use leptos::prelude::*;

use crate::components::login_button::LoginButton;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>"Metadata Portal"</h1>
            <p>"Browse and register dataset metadata anchored on the ledger."</p>
            <Show when=move || auth.with(|s| !s.loading() && !s.signed_in())>
                <LoginButton/>
            </Show>
        </div>
    }
}
