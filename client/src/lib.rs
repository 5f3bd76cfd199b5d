//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio site. Owns every piece of client
//! interactivity: theme switching, the navigation overlay and scroll effects,
//! animated counters, and the contact form with its validation rules and
//! submission pipeline.
//!
//! The `ssr` build of this crate is linked into `folio-server`, which renders
//! the same components on the server and reuses the validation table and wire
//! types to check submitted payloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
