//! Session guard shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth views (`/login`, `/register`) are reachable only while signed out;
//! everything else only while signed in. Each page installs the same guard
//! so the redirect rule lives in one place.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Which side of the guard a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    AuthOnly,
    Protected,
}

/// Where to send the user, if the current route is not reachable.
#[must_use]
pub fn redirect_target(kind: RouteKind, authenticated: bool) -> Option<&'static str> {
    match (kind, authenticated) {
        (RouteKind::Protected, false) => Some(LOGIN_PATH),
        (RouteKind::AuthOnly, true) => Some(HOME_PATH),
        _ => None,
    }
}

/// Redirect whenever the session flips to the wrong side for `kind`.
pub fn install_guard<F>(session: RwSignal<Session>, kind: RouteKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let authenticated = session.with(Session::is_authenticated);
        if let Some(target) = redirect_target(kind, authenticated) {
            navigate(target, NavigateOptions::default());
        }
    });
}
