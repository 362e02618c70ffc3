//! # client
//!
//! Leptos + WASM frontend for the HealthWise hospital application: account
//! sign-up, the doctor dashboard and actions pages, and role-specific
//! navigation. All persistence happens in the external REST backend reached
//! through `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
