//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::pages::{
    auth_notice::{TokenExpiredPage, VerifiedPage},
    home::HomePage,
    login::LoginPage,
    privileged::PrivilegedPage,
    profile::ProfilePage,
    verify::VerifyPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::start_session_check;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth session context and starts the one session check per
/// page load. Effects only run in the browser, so server rendering always
/// sees the unchecked session and renders no gated content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    Effect::new(move || start_session_check(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Metadata Portal"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("verify")) view=VerifyPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("privileged")) view=PrivilegedPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("verified")) view=VerifiedPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("token-expired")) view=TokenExpiredPage/>
                    <Route path=(StaticSegment("auth"), ParamSegment("status")) view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
