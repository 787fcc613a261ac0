//! Root element handles.
//!
//! The stylesheet keys off an attribute on `<html>`. `DocumentRoot` holds
//! that element in the browser; [`MemoryRoot`] stands in for it in tests.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

/// Element whose attributes drive theme styling.
pub trait ThemeRoot {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
}

/// Attribute map standing in for the document root.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    attributes: RefCell<HashMap<String, String>>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attribute(name: &str, value: &str) -> Self {
        let root = Self::new();
        root.set_attribute(name, value);
        root
    }
}

impl ThemeRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }
}

/// The browser's `document.documentElement`.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    /// Look up the current document's root element.
    pub fn attach() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }
}

#[cfg(feature = "hydrate")]
impl ThemeRoot for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        // Only throws for invalid attribute names; `ThemeConfig::validate` screens those.
        if let Err(e) = self.element.set_attribute(name, value) {
            log::warn!("failed to set {name}={value} on root element: {e:?}");
        }
    }
}
