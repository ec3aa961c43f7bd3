//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};
use crate::util::nav;

/// Navigation bar with links to the main views, the signed-in user, and
/// the logout action. The users link only renders for admins.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Cyber Range"</span>
            <a class="nav-bar__link" href="/">"Machines"</a>
            <a class="nav-bar__link" href="/clone">"Clone Lab"</a>
            <Show when=move || session.get().is_admin>
                <a class="nav-bar__link" href="/users">"Users"</a>
            </Show>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{username}</span>
            <button
                class="nav-bar__logout"
                on:click=move |_| session::logout(session, nav::hard_redirect)
            >
                "Log Out"
            </button>
        </nav>
    }
}
