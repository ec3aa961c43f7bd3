use super::*;

fn make_user(is_admin: bool) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        disabled: false,
        is_admin,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_admin);
    assert!(!state.is_authenticated);
}

// =============================================================
// apply_user
// =============================================================

#[test]
fn apply_user_populates_identity_and_privilege() {
    let mut state = SessionState::default();
    state.is_authenticated = true;
    state.apply_user(make_user(true));
    assert!(state.user.is_some());
    assert!(state.is_admin);
    assert!(state.is_authenticated);
}

#[test]
fn apply_user_privilege_matches_server_flag() {
    let mut state = SessionState::default();
    state.is_authenticated = true;
    state.apply_user(make_user(false));
    assert!(!state.is_admin);

    state.apply_user(make_user(true));
    assert!(state.is_admin);
}

#[test]
fn apply_user_clears_stale_privilege() {
    let mut state = SessionState::default();
    state.apply_user(make_user(true));
    state.apply_user(make_user(false));
    assert!(!state.is_admin);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_resets_to_initial_shape() {
    let mut state = SessionState::default();
    state.apply_user(make_user(true));
    state.clear();
    assert_eq!(state, SessionState::default());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.apply_user(make_user(true));
    state.clear();
    let after_first = state.clone();
    state.clear();
    assert_eq!(state, after_first);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn privilege_implies_user_and_authentication() {
    let mut state = SessionState::default();
    state.apply_user(make_user(true));
    assert!(state.is_admin);
    assert!(state.user.is_some());
    assert!(state.is_authenticated);
}

#[test]
fn user_presence_implies_authentication() {
    let mut state = SessionState::default();
    state.apply_user(make_user(false));
    assert!(state.user.is_some());
    assert!(state.is_authenticated);
}

// =============================================================
// fetch_user gate
// =============================================================

#[test]
fn fetch_skipped_when_unauthenticated() {
    let state = SessionState::default();
    assert!(!should_fetch_user(&state));
}

#[test]
fn fetch_allowed_when_credential_present() {
    let state = SessionState {
        user: None,
        is_admin: false,
        is_authenticated: true,
    };
    assert!(should_fetch_user(&state));
}
