//! # memo-client
//!
//! Leptos + WASM frontend for the memo board.
//!
//! This crate owns the DOM: it forwards pointer, wheel and keyboard events to
//! the `canvas` crate's `EngineCore`, runs the clamp timer and browser
//! prompts the engine asks for, and draws each `BoardFrame` it returns.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = util::env::log_level(util::env::location_search().as_deref());
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    log::info!("memo board starting (log level {level})");

    leptos::mount::mount_to_body(app::App);
}
