//! # client
//!
//! Leptos + WASM frontend for the hosted-login demo.
//!
//! This crate holds the page, view components, the auth state reconciler, and
//! the HTTP identity client that talks to the server's `/api/auth/*` endpoints.
//! The server renders it with the `ssr` feature; the browser hydrates it with
//! the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
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
