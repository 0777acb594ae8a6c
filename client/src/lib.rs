//! # habs-client
//!
//! Leptos frontend for the hospital appointment booking system.
//!
//! This crate holds the route guard and its pure access decision, the
//! persisted auth session, the REST client for the booking API, and the
//! pages and components that sit on top of them. The host binary renders it
//! server-side; the `hydrate` build takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
