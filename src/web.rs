//! wasm-bindgen entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page script calls `init_theme()` once at load and wires the returned
//! handle's `toggle` method to the theme button. Nothing is installed on
//! `window`.

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::root::DocumentRoot;
use crate::store::LocalStorage;
use crate::toggle::ThemeToggle;

/// Handle returned to page script after initialization.
#[wasm_bindgen]
pub struct ThemeHandle {
    inner: ThemeToggle<LocalStorage, DocumentRoot>,
}

#[wasm_bindgen]
impl ThemeHandle {
    /// Flip the theme and return the new value (`"light"` or `"dark"`).
    pub fn toggle(&self) -> String {
        self.inner.toggle().as_str().to_owned()
    }

    /// Current theme, or `undefined` when unset or unrecognized.
    pub fn current(&self) -> Option<String> {
        self.inner.current_theme().map(|t| t.as_str().to_owned())
    }
}

/// Apply the stored theme with the default config and return a toggle handle.
///
/// # Errors
///
/// Fails when there is no document root element to attach to.
#[wasm_bindgen]
pub fn init_theme() -> Result<ThemeHandle, JsValue> {
    attach(ThemeConfig::default())
}

/// Like [`init_theme`], with config given as JSON.
///
/// # Errors
///
/// Fails on malformed config or a missing document root element.
#[wasm_bindgen]
pub fn init_theme_with(config_json: &str) -> Result<ThemeHandle, JsValue> {
    let config = ThemeConfig::from_json(config_json).map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    attach(config)
}

fn attach(config: ThemeConfig) -> Result<ThemeHandle, JsValue> {
    config.validate().map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
    console_error_panic_hook::set_once();
    // Already installed on a second init; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Info);

    let root = DocumentRoot::attach().ok_or_else(|| JsValue::from(js_sys::Error::new("no document root element")))?;
    let inner = ThemeToggle::new(config, LocalStorage::attach(), root);
    inner.init();
    Ok(ThemeHandle { inner })
}
