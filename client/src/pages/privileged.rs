//! Landing page for role mismatches.

use leptos::prelude::*;

#[component]
pub fn PrivilegedPage() -> impl IntoView {
    view! {
        <div class="privileged-page">
            <h1>"Access restricted"</h1>
            <p>"Your account does not have the role required to view that page."</p>
            <a href="/" class="login-button">"Home"</a>
        </div>
    }
}
