//! # crm-theme
//!
//! Light/dark theme toggle for the CRM web pages, compiled to WebAssembly.
//!
//! On load the persisted preference is read from `localStorage` and mirrored
//! onto the `data-theme` attribute of the `<html>` element. The handle
//! returned by `web::init_theme` exposes a `toggle` method that flips the
//! attribute between `light` and `dark` and writes the new value back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | [`theme::Theme`] values and the next-value rule |
//! | [`config`] | Storage key and attribute name |
//! | [`error`] | Storage error taxonomy |
//! | [`store`] | Preference store trait plus in-memory and `localStorage` backends |
//! | [`root`] | Root element trait plus in-memory and DOM backends |
//! | [`toggle`] | [`toggle::ThemeToggle`]: init and toggle over a store and a root |
//! | `web` | wasm-bindgen entry points (`hydrate` feature only) |

pub mod config;
pub mod error;
pub mod root;
pub mod store;
pub mod theme;
pub mod toggle;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::{ConfigError, ThemeConfig};
pub use error::StorageError;
pub use theme::Theme;
pub use toggle::ThemeToggle;
