//! Theme customization panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `option` defines the vocabulary, `palette` and `preferences` describe
//! what the template ships and what the backend stores, `panel` is the
//! drawer state machine and `controller` turns clicks into class changes
//! plus save requests.

pub mod controller;
pub mod option;
pub mod palette;
pub mod panel;
pub mod preferences;

pub use controller::{ClassChange, ThemeCatalog, ThemeOutcome, ThemePanelController, ThemeState};
pub use preferences::ThemePreferences;
