//! # range-client
//!
//! Leptos + WASM frontend for the Cyber Range lab manager. The client
//! holds the process-wide session state, funnels every API call through
//! one credential-attaching gateway, and guards protected routes so they
//! are never reachable without a valid session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
