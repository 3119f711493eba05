//! # client
//!
//! Leptos + WASM front end for the Python Learning site. Its one job beyond
//! rendering the page shell is the initial load gate: a splash screen held up
//! until the page's media is ready, bounded by a minimum dwell and a maximum
//! wait, and shown once per browser session.
//!
//! The gate's state machine lives in the `loadgate` crate; this crate hosts
//! it on browser timers and wires its effects to `sessionStorage` and the DOM.

pub mod app;
pub mod components;
pub mod hooks;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
