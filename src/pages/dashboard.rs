//! Dashboard page listing every VM in the cluster.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::vm_card::VmCard;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Vm;
use crate::routes;
use crate::state::session::SessionState;
use crate::util::guard;

/// Dashboard page showing the VM inventory as cards.
/// The route guard redirects to `/login` when unauthenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install_route_guard(session, &routes::HOME, use_navigate());

    let vms = LocalResource::new(move || api::get::<Vec<Vm>>(session, "/vms"));

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <main class="dashboard-page__content">
                <header class="dashboard-page__header">
                    <h1>"Virtual Machines"</h1>
                </header>
                <Suspense fallback=move || view! { <p>"Loading machines..."</p> }>
                    {move || {
                        vms.get().map(render_vm_list)
                    }}
                </Suspense>
            </main>
        </div>
    }
}

fn render_vm_list(result: Result<Vec<Vm>, ApiError>) -> AnyView {
    match result {
        Ok(list) if list.is_empty() => {
            view! { <p class="dashboard-page__empty">"No machines found."</p> }.into_any()
        }
        Ok(list) => view! {
            <div class="dashboard-page__grid">
                {list
                    .into_iter()
                    .map(|vm| view! { <VmCard vm=vm/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Err(e) => view! { <p class="dashboard-page__error">{format!("Failed to load machines: {e}")}</p> }
            .into_any(),
    }
}
