//! # client
//!
//! Leptos + WASM front end for the personal-banking dashboard.
//!
//! This crate contains pages, components, session and preference state,
//! network types, and the REST helpers for the `/v1` API. Browser-only code
//! (`localStorage`, `fetch`, DOM attributes) is compiled behind the `csr`
//! feature; without it the same state logic builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
