//! Persisted theme preferences.
//!
//! DESIGN
//! ======
//! Mirrors the per-user profile fields the backend stores. The page
//! injects the current values so the panel can pre-mark swatches, and
//! `apply` folds a save request into the record the same way the
//! preference endpoint does: booleans are on only for the exact string
//! `"true"`, class settings take the raw value, unknown settings are
//! ignored.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use super::option::{ChoiceGroup, DEFAULT_TAB_STYLE, DEFAULT_THEME_COLOR, LayoutToggle, Setting};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePreferences {
    pub fixed_header: bool,
    pub fixed_sidebar: bool,
    pub fixed_footer: bool,
    pub header_class: String,
    pub sidebar_class: String,
    pub page_tabs_style: String,
    pub theme_color: String,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            fixed_header: false,
            fixed_sidebar: false,
            fixed_footer: false,
            header_class: String::new(),
            sidebar_class: String::new(),
            page_tabs_style: DEFAULT_TAB_STYLE.to_owned(),
            theme_color: DEFAULT_THEME_COLOR.to_owned(),
        }
    }
}

impl ThemePreferences {
    /// Persisted class string for a choice group.
    #[must_use]
    pub fn choice(&self, group: ChoiceGroup) -> &str {
        match group {
            ChoiceGroup::HeaderColor => &self.header_class,
            ChoiceGroup::SidebarColor => &self.sidebar_class,
            ChoiceGroup::TabStyle => &self.page_tabs_style,
            ChoiceGroup::ThemeColor => &self.theme_color,
        }
    }

    #[must_use]
    pub fn toggle(&self, toggle: LayoutToggle) -> bool {
        match toggle {
            LayoutToggle::FixedHeader => self.fixed_header,
            LayoutToggle::FixedSidebar => self.fixed_sidebar,
            LayoutToggle::FixedFooter => self.fixed_footer,
        }
    }

    /// Fold one `{setting, value}` pair into the record.
    ///
    /// Returns `false` when the setting is not recognized and nothing changed.
    pub fn apply(&mut self, setting: &str, value: &str) -> bool {
        let Ok(setting) = setting.parse::<Setting>() else {
            return false;
        };
        let flag = value == "true";
        match setting {
            Setting::FixedHeader => self.fixed_header = flag,
            Setting::FixedSidebar => self.fixed_sidebar = flag,
            Setting::FixedFooter => self.fixed_footer = flag,
            Setting::HeaderClass => value.clone_into(&mut self.header_class),
            Setting::SidebarClass => value.clone_into(&mut self.sidebar_class),
            Setting::PageTabsStyle => value.clone_into(&mut self.page_tabs_style),
            Setting::ThemeColor => value.clone_into(&mut self.theme_color),
        }
        true
    }
}
