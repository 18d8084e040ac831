//! # FOLIO Web
//!
//! Browser bindings for `folio_core`. Each page behavior is mounted on its
//! own: a missing element or an unsupported API skips that behavior and the
//! rest of the page keeps working.
//!
//! ```text
//! start()
//!   ├─ load #folio-config (TOML) ─▶ FolioConfig
//!   ├─ logging::init(log_level)
//!   └─ mount each behavior ─▶ log and continue on failure
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod carousel;
pub mod contact;
pub mod counters;
pub mod dom;
pub mod error;
pub mod frame;
pub mod logging;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod text;
pub mod theme;

pub use error::{WebError, WebResult};

use folio_core::{FolioConfig, FolioResult};
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Id of the inline `<script type="application/toml">` holding page config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Page entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };
    let document = window.document();

    let (config, config_error) = match document.as_ref().map(load_config) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (FolioConfig::default(), Some(err)),
        None => (FolioConfig::default(), None),
    };
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid page config, using defaults");
    }

    mount("theme", theme::mount(&window));
    mount("particles", particles::mount(&window, &config.particles));
    mount("reveal", reveal::mount(&config.reveal));
    mount("nav", nav::mount());
    mount("anchors", nav::mount_anchors(&window));
    mount("split text", text::mount(&window));
    mount("counters", counters::mount(&window, &config.counter));
    mount("year", counters::mount_year());
    mount("pointer", pointer::mount(&window, &config.pointer));
    mount("carousel", carousel::mount());
    mount("contact", contact::mount(&window, &config.contact));
    tracing::info!("page behaviors mounted");
}

/// Reads the inline config block. No block means defaults.
///
/// # Errors
///
/// Returns the parse or validation error of a malformed block.
pub fn load_config(document: &Document) -> FolioResult<FolioConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => FolioConfig::from_toml_str(&text),
        None => Ok(FolioConfig::default()),
    }
}

fn mount(name: &'static str, result: WebResult<()>) {
    match result {
        Ok(()) => {}
        Err(WebError::Missing(what)) => {
            tracing::debug!(behavior = name, missing = what, "behavior skipped");
        }
        Err(err) => tracing::warn!(behavior = name, error = %err, "behavior failed"),
    }
}
