use super::*;
use crate::routes::{CLONE, HOME, LOGIN, USERS};

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_route_redirects_when_unauthenticated() {
    for route in [&HOME, &CLONE, &USERS] {
        assert_eq!(
            evaluate(route, false, GuardConfig::default()),
            GuardOutcome::RedirectToLogin
        );
    }
}

#[test]
fn protected_route_allows_when_authenticated() {
    for route in [&HOME, &CLONE, &USERS] {
        assert_eq!(evaluate(route, true, GuardConfig::default()), GuardOutcome::Allow);
    }
}

// =============================================================
// Login route
// =============================================================

#[test]
fn login_route_allows_when_unauthenticated() {
    assert_eq!(evaluate(&LOGIN, false, GuardConfig::default()), GuardOutcome::Allow);
}

#[test]
fn login_route_allows_authenticated_by_default() {
    assert_eq!(evaluate(&LOGIN, true, GuardConfig::default()), GuardOutcome::Allow);
}

#[test]
fn login_route_redirects_authenticated_when_configured() {
    let config = GuardConfig { redirect_authenticated_from_login: true };
    assert_eq!(evaluate(&LOGIN, true, config), GuardOutcome::RedirectHome);
}

#[test]
fn login_route_still_allows_unauthenticated_when_configured() {
    let config = GuardConfig { redirect_authenticated_from_login: true };
    assert_eq!(evaluate(&LOGIN, false, config), GuardOutcome::Allow);
}

// =============================================================
// Public routes never consult the session
// =============================================================

#[test]
fn public_route_allows_regardless_of_session() {
    let route = RouteMeta { path: "/about", name: "about", requires_auth: false };
    assert_eq!(evaluate(&route, false, GuardConfig::default()), GuardOutcome::Allow);
    assert_eq!(evaluate(&route, true, GuardConfig::default()), GuardOutcome::Allow);
}
