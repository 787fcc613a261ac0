//! Theme initialization and toggle.
//!
//! Reads the user's preference from the store and mirrors it onto the root
//! element's theme attribute. Toggle flips the attribute between `light` and
//! `dark` and writes the new value back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are logged and swallowed so
//! the visible theme always follows the user's click. Stored values are
//! applied verbatim without validation, so a hand-edited entry still reaches
//! the stylesheet.

use crate::config::ThemeConfig;
use crate::error::StorageError;
use crate::root::ThemeRoot;
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Binds a preference store to a root element attribute.
pub struct ThemeToggle<S, R> {
    config: ThemeConfig,
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeToggle<S, R> {
    pub fn new(config: ThemeConfig, store: S, root: R) -> Self {
        Self { config, store, root }
    }

    /// Apply the persisted preference, if any, to the root element.
    ///
    /// Never writes to the store. Returns the applied value.
    pub fn init(&self) -> Option<String> {
        let key = &self.config.storage_key;
        let saved = match self.store.get(key) {
            Ok(saved) => saved,
            // `LocalStorage::attach` already warned about a missing store.
            Err(e @ StorageError::Unavailable) => {
                log::debug!("theme preference not loaded: {e}");
                None
            }
            Err(e) => {
                log::warn!("theme preference not loaded: {e}");
                None
            }
        };

        // Empty string counts as nothing stored.
        let saved = saved.filter(|v| !v.is_empty())?;
        self.root.set_attribute(&self.config.attribute, &saved);
        log::debug!("applied stored theme {saved:?} from {key}");
        Some(saved)
    }

    /// Flip the theme, apply it, and persist it.
    pub fn toggle(&self) -> Theme {
        let current = self.root.attribute(&self.config.attribute);
        let next = Theme::next_after(current.as_deref());
        self.root.set_attribute(&self.config.attribute, next.as_str());

        match self.store.set(&self.config.storage_key, next.as_str()) {
            Ok(()) => log::debug!("theme set to {next}"),
            Err(e @ StorageError::Unavailable) => log::debug!("theme set to {next} but not persisted: {e}"),
            Err(e) => log::warn!("theme set to {next} but not persisted: {e}"),
        }
        next
    }

    /// The root attribute as a [`Theme`], if it holds a recognized value.
    pub fn current_theme(&self) -> Option<Theme> {
        self.root.attribute(&self.config.attribute)?.parse().ok()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}
