//! Toggle configuration: where the preference lives and which attribute it drives.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key used by the CRM pages.
pub const DEFAULT_STORAGE_KEY: &str = "crm-theme";

/// Root element attribute read by the stylesheet.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("invalid root attribute name: {0:?}")]
    InvalidAttribute(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), attribute: DEFAULT_ATTRIBUTE.to_owned() }
    }
}

impl ThemeConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input, or the
    /// [`validate`](Self::validate) error for unusable values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the key and attribute can be used against the browser.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] for an empty key and
    /// [`ConfigError::InvalidAttribute`] for an empty attribute name or one
    /// containing whitespace, which the DOM rejects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.attribute.is_empty() || self.attribute.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidAttribute(self.attribute.clone()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }
}
