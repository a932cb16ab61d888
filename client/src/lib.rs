//! # client
//!
//! Leptos + WASM frontend for the items management application: a single
//! screen listing items with a modal form for create and edit, backed by the
//! `/api/items` REST endpoints.
//!
//! This crate contains the page, components, application state, and the REST
//! helpers. All remote calls re-fetch the full item list afterwards; local
//! state is never patched optimistically.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point, invoked from the generated JS shim.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
