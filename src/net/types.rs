//! Wire DTOs for the theme preference endpoint.
//!
//! DESIGN
//! ======
//! Both fields travel as strings. Boolean toggles send `"true"`/`"false"`
//! while choice groups send raw class strings; the backend depends on that
//! asymmetry, so it is kept as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::theme::option::{ChoiceGroup, LayoutToggle};

/// Request body for `POST /save-theme-preference/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePreference {
    /// Backend setting name (e.g. `header_class`).
    pub setting: String,
    /// New value; empty restores the template default.
    pub value: String,
}

impl SavePreference {
    #[must_use]
    pub fn choice(group: ChoiceGroup, value: impl Into<String>) -> Self {
        Self { setting: group.setting().as_str().to_owned(), value: value.into() }
    }

    #[must_use]
    pub fn toggle(toggle: LayoutToggle, enabled: bool) -> Self {
        Self { setting: toggle.setting().as_str().to_owned(), value: enabled.to_string() }
    }
}

/// Response body from the preference endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
