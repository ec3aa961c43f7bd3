//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<SessionState>` provided from `App` is the source of
//! truth for "am I logged in, who am I, am I privileged". All mutation
//! funnels through `initialize`, `fetch_user`, and `logout`; components
//! only read. `is_authenticated` is seeded optimistically from the stored
//! credential and corrected the first time the server rejects it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::routes;
use crate::util::{nav, token};

/// Shared session record.
///
/// Invariant: `is_admin` implies `user` is present, and `user` present
/// implies `is_authenticated`. The reverse does not hold: after boot the
/// flag may be true from storage before the identity has been fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current identity, absent until fetched and after logout.
    pub user: Option<User>,
    /// Privilege flag derived from `user`.
    pub is_admin: bool,
    /// True iff a credential is stored (optimistic until validated).
    pub is_authenticated: bool,
}

impl SessionState {
    /// Record a freshly fetched identity and derive the privilege flag.
    pub(crate) fn apply_user(&mut self, user: User) {
        self.is_admin = user.is_admin;
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Reset to the initial unauthenticated shape. Idempotent.
    pub(crate) fn clear(&mut self) {
        self.user = None;
        self.is_admin = false;
        self.is_authenticated = false;
    }
}

/// Whether `fetch_user` should issue a request at all.
pub(crate) fn should_fetch_user(state: &SessionState) -> bool {
    state.is_authenticated
}

/// Seed `is_authenticated` from credential presence. No network call;
/// idempotent, so safe to call again after a login stores a credential.
pub fn initialize(session: RwSignal<SessionState>) {
    let has_credential = token::load().is_some();
    session.update(|state| state.is_authenticated = has_credential);
}

/// Resolve the current identity from `/api/users/me`.
///
/// No-op when unauthenticated. Any failure (network, authorization,
/// decode) is treated uniformly as "session is invalid" and funnels into
/// `logout`; an auth failure inside the gateway has already torn the
/// session down, and the second `logout` is harmless.
pub async fn fetch_user(session: RwSignal<SessionState>) {
    if !should_fetch_user(&session.get_untracked()) {
        return;
    }
    match api::get::<User>(session, "/users/me").await {
        Ok(user) => session.update(|state| state.apply_user(user)),
        Err(_err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("identity fetch failed: {_err}");
            logout(session, nav::hard_redirect);
        }
    }
}

/// End the session: drop the stored credential, reset the shared state,
/// and send the user to the login destination.
///
/// The single chokepoint for session teardown. Performs no network call,
/// so it is safe to invoke from a failed-request handler, and every step
/// is idempotent.
pub fn logout<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str),
{
    token::clear();
    session.update(SessionState::clear);
    navigate(routes::LOGIN_PATH);
}
