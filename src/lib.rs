//! # dining-client
//!
//! Leptos + WASM frontend for the restaurant dining floor view.
//!
//! This crate contains the dining table page, its presentational components,
//! the page state machine, and the REST types for floors and tables.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
    log::debug!("dining client hydrated");
}
