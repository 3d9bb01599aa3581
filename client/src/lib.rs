//! # client
//!
//! Leptos + WASM frontend for the chatbot's authentication flows.
//!
//! This crate contains the root layout, the login/register pages, the shared
//! auth form and submit control, the result reducer that maps action outcomes
//! to notifications and session refreshes, and the REST helpers for the auth
//! endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
