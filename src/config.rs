//! Page-injected configuration.
//!
//! The server template may define a global object (default
//! `window.themeSettings`) holding the persisted theme values and a few
//! wiring knobs. Every field is optional; an absent or malformed object
//! falls back to `PageConfig::default()`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::theme::preferences::ThemePreferences;

pub const DEFAULT_CONFIG_GLOBAL: &str = "themeSettings";
pub const DEFAULT_SAVE_ENDPOINT: &str = "/save-theme-preference/";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config global `{0}` is not defined")]
    Missing(String),
    #[error("config global `{0}` could not be serialized")]
    Unreadable(String),
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub save_endpoint: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Verbose console logging plus the delayed panel diagnostic.
    pub debug: bool,
    /// Persisted values, flattened so the template can inject
    /// `{"header_class": "...", "sidebar_class": "..."}` directly.
    #[serde(flatten)]
    pub preferences: ThemePreferences,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            save_endpoint: DEFAULT_SAVE_ENDPOINT.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            csrf_header: DEFAULT_CSRF_HEADER.to_owned(),
            debug: false,
            preferences: ThemePreferences::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config object from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Json` if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the config from `window[global]`.
    ///
    /// # Errors
    ///
    /// Returns `Missing` when the global is absent (always the case outside
    /// the browser), `Unreadable` when it cannot be stringified and `Json`
    /// when its shape is wrong.
    pub fn from_window(global: &str) -> Result<Self, ConfigError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsValue;

            let missing = || ConfigError::Missing(global.to_owned());
            let window = web_sys::window().ok_or_else(missing)?;
            let value = js_sys::Reflect::get(&window, &JsValue::from_str(global)).map_err(|_| missing())?;
            if value.is_undefined() || value.is_null() {
                return Err(missing());
            }
            let raw = js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
                .ok_or_else(|| ConfigError::Unreadable(global.to_owned()))?;
            Self::from_json(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ConfigError::Missing(global.to_owned()))
        }
    }

    /// Console verbosity: everything in debug mode, warnings otherwise.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug { log::LevelFilter::Debug } else { log::LevelFilter::Warn }
    }

    /// `from_window`, falling back to defaults with a log line.
    #[must_use]
    pub fn load(global: &str) -> Self {
        match Self::from_window(global) {
            Ok(config) => config,
            Err(ConfigError::Missing(_)) => {
                log::debug!("no page config at window.{global}; using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
