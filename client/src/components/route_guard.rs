//! Page-level access guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected page. Children render only after the session check has
//! landed and the gate allows the current path; otherwise nothing renders
//! while the redirect is in progress.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use gate::RouteRequirement;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::gate_config;
use crate::state::auth::AuthState;
use crate::util::auth::install_access_redirect;

/// Render `children` only when `requirement` holds for the current user.
#[component]
pub fn RouteGuard(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let allowed = guard_route(requirement);

    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Hook form of [`RouteGuard`] for pages that render their own fallback.
///
/// Requires a verified account and, when given, `role`. Returns a signal that
/// is true only once access is confirmed.
pub fn use_protected_route(role: Option<&str>) -> Signal<bool> {
    guard_route(RouteRequirement::protected_page(role))
}

fn guard_route(requirement: RouteRequirement) -> Signal<bool> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let path = use_location().pathname;
    install_access_redirect(auth, requirement.clone(), path, use_navigate());
    route_access(requirement, path)
}

/// Whether the session in context satisfies `requirement` on `path`.
///
/// False while the session check is pending.
pub(crate) fn route_access(requirement: RouteRequirement, path: Memo<String>) -> Signal<bool> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let paths = gate_config().paths;

    Signal::derive(move || {
        auth.with(|state| {
            path.with(|p| state.session.gate(&requirement, p, &paths).is_allowed())
        })
    })
}
