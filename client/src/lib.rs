//! # tourvisto-ui
//!
//! Leptos frontend for the Tourvisto admin dashboard.
//!
//! The crate holds the route tree, pages, components, client state, and the
//! wire types shared with the server. Built with `ssr` it is rendered by the
//! server; built with `hydrate` it compiles to WASM and takes over in the
//! browser.

pub mod app;
pub mod components;
pub mod constants;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
