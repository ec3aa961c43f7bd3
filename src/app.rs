//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{clone::CloneLabPage, dashboard::DashboardPage, login::LoginPage, users::UsersPage};
use crate::state::session::{self, SessionState};
use crate::util::guard::GuardConfig;

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
/// Provides the shared session context, seeds it from the stored
/// credential, kicks off the identity fetch, and sets up client-side
/// routing. The route table here matches `routes::ROUTES`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(GuardConfig::default());

    session::initialize(session);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session::fetch_user(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/range-client.css"/>
        <Title text="Cyber Range"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("clone") view=CloneLabPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
            </Routes>
        </Router>
    }
}
