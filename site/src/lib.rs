//! # site
//!
//! Leptos UI for the portfolio page, rendered on the server and hydrated in
//! the browser.
//!
//! Every computed behavior (tilt, parallax, orb layout, copy feedback) lives
//! in the `effects` crate; this crate reads pointer events, element bounds and
//! the motion preference from the DOM, feeds them in, and binds the results to
//! styles and text.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
