//! # authflow-client
//!
//! Leptos + WASM frontend for the phone-number login demo.
//!
//! This crate contains the whole application: the phone validator, the
//! browser-persisted session store, the login flow against the remote user
//! directory, and the dashboard route guard, plus the pages and components
//! that render them. The `authflow` host only server-renders it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
