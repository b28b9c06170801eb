//! # client
//!
//! Leptos + WASM frontend for the shared bike service.
//!
//! Signed-in users see every bike on a Google map and can rent an available
//! bike or return the one they hold. The crate holds the pages, components,
//! reactive state, REST client and the map bindings; the host binary renders
//! it server-side and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod net;
pub mod pages;
pub mod queries;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
