//! Interactive behavior for a site's navigation header.
//!
//! This crate is compiled to WebAssembly and loaded by the page. On start it
//! binds to the header markup and wires three independent features: the
//! mobile nav overlay, accordion submenus, and the sticky header. Each
//! feature whose elements are missing from the page is simply skipped.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | Top-level controller and testable [`header::HeaderCore`] |
//! | [`nav`] | Mobile nav open/closed state |
//! | [`sticky`] | Sticky header state and cached header height |
//! | [`menu`] | Accordion algorithm over the [`menu::MenuTree`] abstraction |
//! | [`arena`] | In-memory menu tree |
//! | [`dom`] | `web-sys` helpers, DOM-backed menu tree, RAII listeners |
//! | [`input`] | Key and sticky-trigger types |
//! | [`config`] | Class names and selectors the controller binds to |
//! | [`error`] | Initialization errors |
//! | [`consts`] | Default class names and selectors |

pub mod arena;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod header;
pub mod input;
pub mod menu;
pub mod nav;
pub mod sticky;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document};

use crate::config::HeaderConfig;
use crate::consts::CONFIG_ATTRIBUTE;
use crate::error::HeaderError;
use crate::header::HeaderController;

thread_local! {
    static CONTROLLER: RefCell<Option<HeaderController>> = const { RefCell::new(None) };
}

/// WASM entry point: set up logging, then initialize the header once the document is ready.
///
/// # Errors
///
/// Returns the error message as a `JsValue` if there is no window or
/// document, or if initialization fails synchronously.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }

    let window = web_sys::window().ok_or(HeaderError::NoWindow)?;
    let document = window.document().ok_or(HeaderError::NoDocument)?;

    if is_dom_ready(&document.ready_state()) {
        return install(&document).map_err(JsValue::from);
    }

    let doc = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = install(&doc) {
            log::error!("header init failed: {err}");
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Whether `document.readyState` means the DOM is parsed (`"interactive"` or `"complete"`).
fn is_dom_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Initialize the controller for `doc` and keep it alive for the page's lifetime.
fn install(doc: &Document) -> Result<(), HeaderError> {
    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(HeaderError::AlreadyInitialized);
        }
        let controller = HeaderController::init(doc, load_config(doc))?;
        *slot = Some(controller);
        Ok(())
    })
}

/// Defaults, overridden by the body's JSON config attribute when present and valid.
fn load_config(doc: &Document) -> HeaderConfig {
    let Some(raw) = doc.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE)) else {
        return HeaderConfig::default();
    };
    match HeaderConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
            HeaderConfig::default()
        }
    }
}
