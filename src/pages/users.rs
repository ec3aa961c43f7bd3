//! User administration page: list, register, and delete accounts.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::routes;
use crate::state::session::SessionState;
use crate::util::guard;

fn user_delete_endpoint(user_id: i64) -> String {
    format!("/users/{user_id}")
}

/// Whether `user_id` is the account currently signed in. Self-deletion is
/// disabled in the UI; the server rejects it as well.
fn is_current_user(state: &SessionState, user_id: i64) -> bool {
    state.user.as_ref().is_some_and(|user| user.id == user_id)
}

fn validate_new_user_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// User administration page. The guard enforces authentication; the
/// privilege gate is a view-level courtesy, and the server enforces the
/// admin requirement on every mutation.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install_route_guard(session, &routes::USERS, use_navigate());

    let users = LocalResource::new(move || api::get::<Vec<User>>(session, "/users/"));

    let new_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_new_user_input(&new_username.get(), &new_password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating user...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                let body = serde_json::json!({
                    "username": username_value,
                    "password": password_value,
                });
                match api::post::<User, _>(session, "/users/", &body).await {
                    Ok(created) => {
                        info.set(format!("User {} created.", created.username));
                        new_username.set(String::new());
                        new_password.set(String::new());
                        users.refetch();
                    }
                    Err(e) => info.set(format!("User creation failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    let on_delete = Callback::new(move |user_id: i64| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Deleting user...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                use crate::net::types::MessageResponse;
                match api::delete::<MessageResponse>(session, &user_delete_endpoint(user_id)).await {
                    Ok(response) => {
                        info.set(response.message);
                        users.refetch();
                    }
                    Err(e) => info.set(format!("Deletion failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    view! {
        <div class="users-page">
            <NavBar/>
            <main class="users-page__content">
                <header class="users-page__header">
                    <h1>"Users"</h1>
                </header>

                <Show when=move || !session.get().is_admin>
                    <p class="users-page__notice">"Administrator access required."</p>
                </Show>

                <Show when=move || !info.get().is_empty()>
                    <p class="users-page__message">{move || info.get()}</p>
                </Show>

                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users.get().map(|result| render_user_list(result, session, on_delete))
                    }}
                </Suspense>

                <section class="users-page__create">
                    <h2>"Register User"</h2>
                    <form class="users-page__create-form" on:submit=on_create>
                        <input
                            class="users-page__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || new_username.get()
                            on:input=move |ev| new_username.set(event_target_value(&ev))
                        />
                        <input
                            class="users-page__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Create"
                        </button>
                    </form>
                </section>
            </main>
        </div>
    }
}

fn render_user_list(
    result: Result<Vec<User>, ApiError>,
    session: RwSignal<SessionState>,
    on_delete: Callback<i64>,
) -> AnyView {
    match result {
        Ok(list) => view! {
            <ul class="users-page__list">
                {list
                    .into_iter()
                    .map(|user| {
                        let is_self = is_current_user(&session.get_untracked(), user.id);
                        let user_id = user.id;
                        let username = user.username.clone();
                        let is_admin = user.is_admin;
                        view! {
                            <li class="users-page__row">
                                <span class="users-page__username">{username}</span>
                                <Show when=move || is_admin>
                                    <span class="users-page__badge">"admin"</span>
                                </Show>
                                <button
                                    class="users-page__delete"
                                    disabled=is_self
                                    on:click=move |_| on_delete.run(user_id)
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        Err(e) => view! { <p class="users-page__error">{format!("Failed to load users: {e}")}</p> }
            .into_any(),
    }
}
