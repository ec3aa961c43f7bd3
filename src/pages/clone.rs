//! Clone-lab page: clone every template and tag templates into lab groups.

#[cfg(test)]
#[path = "clone_test.rs"]
mod clone_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Vm;
use crate::routes;
use crate::state::session::SessionState;
use crate::util::guard;

fn template_tag_endpoint(vmid: i64) -> String {
    format!("/templates/{vmid}/tag")
}

/// Split a comma-separated lab-group input into clean group names.
fn parse_lab_groups(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_vmid(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

fn is_template(vm: &Vm) -> bool {
    vm.hardware_details.template != 0
}

/// Clone-lab page: lists templates, clones all of them in one action,
/// and updates a template's lab-group tags.
#[component]
pub fn CloneLabPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install_route_guard(session, &routes::CLONE, use_navigate());

    let vms = LocalResource::new(move || api::get::<Vec<Vm>>(session, "/vms"));

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let tag_vmid = RwSignal::new(String::new());
    let tag_groups = RwSignal::new(String::new());

    let on_clone_all = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Cloning templates...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let vms = vms.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::CloneReport;
                match api::post::<CloneReport, _>(session, "/clone_templates", &serde_json::json!({}))
                    .await
                {
                    Ok(report) => {
                        info.set(report.message);
                        vms.refetch();
                    }
                    Err(e) => info.set(format!("Cloning failed: {e}")),
                }
                busy.set(false);
            });
        }
    };

    let on_tag = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(vmid) = parse_vmid(&tag_vmid.get()) else {
            info.set("Enter a numeric template ID.".to_owned());
            return;
        };
        let groups = parse_lab_groups(&tag_groups.get());
        busy.set(true);
        info.set("Updating template tags...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let vms = vms.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::MessageResponse;
                let body = serde_json::json!({ "lab_groups": groups });
                match api::put::<MessageResponse, _>(session, &template_tag_endpoint(vmid), &body)
                    .await
                {
                    Ok(response) => {
                        info.set(response.message);
                        vms.refetch();
                    }
                    Err(e) => info.set(format!("Tag update failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (vmid, groups);
        }
    };

    view! {
        <div class="clone-page">
            <NavBar/>
            <main class="clone-page__content">
                <header class="clone-page__header">
                    <h1>"Clone Lab"</h1>
                    <button class="btn btn--primary" on:click=on_clone_all disabled=move || busy.get()>
                        "Clone All Templates"
                    </button>
                </header>

                <Show when=move || !info.get().is_empty()>
                    <p class="clone-page__message">{move || info.get()}</p>
                </Show>

                <section class="clone-page__templates">
                    <h2>"Templates"</h2>
                    <Suspense fallback=move || view! { <p>"Loading templates..."</p> }>
                        {move || {
                            vms.get().map(render_template_list)
                        }}
                    </Suspense>
                </section>

                <section class="clone-page__tagging">
                    <h2>"Tag Template"</h2>
                    <form class="clone-page__tag-form" on:submit=on_tag>
                        <input
                            class="clone-page__input"
                            type="text"
                            placeholder="Template ID"
                            prop:value=move || tag_vmid.get()
                            on:input=move |ev| tag_vmid.set(event_target_value(&ev))
                        />
                        <input
                            class="clone-page__input"
                            type="text"
                            placeholder="Lab groups (comma-separated)"
                            prop:value=move || tag_groups.get()
                            on:input=move |ev| tag_groups.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || busy.get()>
                            "Apply Tags"
                        </button>
                    </form>
                </section>
            </main>
        </div>
    }
}

fn render_template_list(result: Result<Vec<Vm>, ApiError>) -> AnyView {
    match result {
        Ok(list) => {
            let templates: Vec<Vm> = list.into_iter().filter(is_template).collect();
            if templates.is_empty() {
                return view! { <p class="clone-page__empty">"No templates found."</p> }.into_any();
            }
            view! {
                <ul class="clone-page__template-list">
                    {templates
                        .into_iter()
                        .map(|vm| {
                            let label = vm.name.clone().unwrap_or_else(|| format!("vm-{}", vm.proxmox_id));
                            view! {
                                <li class="clone-page__template">
                                    <span class="clone-page__template-name">{label}</span>
                                    <span class="clone-page__template-id">{vm.proxmox_id}</span>
                                    <span class="clone-page__template-desc">{vm.hardware_details.description.clone()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            }
            .into_any()
        }
        Err(e) => view! { <p class="clone-page__error">{format!("Failed to load templates: {e}")}</p> }
            .into_any(),
    }
}
