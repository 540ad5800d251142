//! # anteroom
//!
//! Leptos + WASM authentication front-end for a role-gated single-page
//! application. Replaces an ad-hoc per-page auth scattering with one
//! session store, one token-refresh flow, and one route-guard helper.
//!
//! This crate contains pages, components, application state, network types,
//! and the auth client. The backing HTTP API lives elsewhere; this crate
//! only assumes its `/login` and `/refresh-token` endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
