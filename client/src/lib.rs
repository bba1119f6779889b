//! # client
//!
//! Leptos + WASM dashboard for the AI consciousness rubric.
//!
//! The page fetches one static JSON document on mount and renders it as a
//! two-ring donut, per-level metric cards, and paper listings with star
//! ratings. All arithmetic lives in the `rubric` crate; this crate owns
//! pages, components, UI state, the fetch, and browser glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
