//! # portfolio
//!
//! WASM behavior layer for a static portfolio page. The HTML document ships
//! the markup; this crate attaches to it once and wires theme persistence,
//! the mobile navigation toggle, the skills accordion, modal dialogs, and the
//! client-only contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | In-memory widget state and every state transition |
//! | [`config`] | Element ids, storage key, and timing defaults |
//! | [`error`] | Form validation and mount errors |
//! | [`util`] | Email validation and clock helpers |
//! | `dom` | Browser-only wiring and render projection (`hydrate` feature) |
//!
//! The DOM is never the source of truth: handlers mutate [`state::PageState`]
//! and then project it back onto the document.

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point. Runs once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = dom::read_config();
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    if let Err(err) = dom::mount(config) {
        log::error!("portfolio: mount failed: {err}");
    }
}
