//! Route entry guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical entry rules: a route that requires
//! authentication redirects to `/login` when the session flag is off, and
//! the transition is cancelled rather than queued. The decision itself is
//! a pure function over the route metadata and the session flag; pages
//! install it as an effect with an injected navigate capability.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{self, RouteMeta};
use crate::state::session::SessionState;

/// Behavior toggles for the guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Send already-authenticated users away from the login route. Off by
    /// default: the login screen stays reachable for re-login.
    pub redirect_authenticated_from_login: bool,
}

/// Decision for one attempted route transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Transition proceeds unmodified.
    Allow,
    /// Transition cancelled; go to the login destination instead.
    RedirectToLogin,
    /// Transition cancelled; go to the home destination instead.
    RedirectHome,
}

/// Evaluate a transition to `route` against the session flag.
pub fn evaluate(route: &RouteMeta, is_authenticated: bool, config: GuardConfig) -> GuardOutcome {
    if route.requires_auth && !is_authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    if route.path == routes::LOGIN_PATH
        && is_authenticated
        && config.redirect_authenticated_from_login
    {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Allow
}

/// Re-evaluate the guard for `route` whenever the session changes, and
/// redirect through `navigate` when entry is not allowed.
pub fn install_route_guard<F>(
    session: RwSignal<SessionState>,
    route: &'static RouteMeta,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let config = use_context::<GuardConfig>().unwrap_or_default();
    let navigate = navigate.clone();
    Effect::new(move || {
        match evaluate(route, session.get().is_authenticated, config) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectToLogin => {
                navigate(routes::LOGIN_PATH, NavigateOptions::default());
            }
            GuardOutcome::RedirectHome => {
                navigate(routes::HOME_PATH, NavigateOptions::default());
            }
        }
    });
}
