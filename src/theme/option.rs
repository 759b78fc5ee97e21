//! Theme option vocabulary: groups, toggles, settings and targets.
//!
//! DESIGN
//! ======
//! Every clickable control in the panel maps to one `ThemeOption`. The
//! option's `value` is the raw `data-class` string from the markup and may
//! hold several class tokens (e.g. `bg-primary header-text-light`) or be
//! empty, meaning "back to the template default".

#[cfg(test)]
#[path = "option_test.rs"]
mod option_test;

use std::fmt;
use std::str::FromStr;

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};

/// Default tab style applied by "restore defaults".
pub const DEFAULT_TAB_STYLE: &str = "body-tabs-shadow";
/// Default theme color applied by "restore defaults".
pub const DEFAULT_THEME_COLOR: &str = "app-theme-white";

/// Element a class change lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<body>`.
    Body,
    /// The template's header bar.
    Header,
    /// The template's sidebar.
    Sidebar,
    /// The template's outermost container; carries layout flags.
    AppRoot,
}

/// Backend setting names accepted by the preference endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    FixedHeader,
    FixedSidebar,
    FixedFooter,
    HeaderClass,
    SidebarClass,
    PageTabsStyle,
    ThemeColor,
}

impl Setting {
    pub const ALL: [Setting; 7] = [
        Setting::FixedHeader,
        Setting::FixedSidebar,
        Setting::FixedFooter,
        Setting::HeaderClass,
        Setting::SidebarClass,
        Setting::PageTabsStyle,
        Setting::ThemeColor,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FixedHeader => "fixed_header",
            Self::FixedSidebar => "fixed_sidebar",
            Self::FixedFooter => "fixed_footer",
            Self::HeaderClass => "header_class",
            Self::SidebarClass => "sidebar_class",
            Self::PageTabsStyle => "page_tabs_style",
            Self::ThemeColor => "theme_color",
        }
    }

    /// Derive the setting a CSS class controls (`fixed-header` → `fixed_header`).
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        class.trim().to_snake_case().parse().ok()
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.as_str() == s)
            .ok_or_else(|| format!("unknown setting: {s}"))
    }
}

/// Exclusive-choice groups: at most one option per group is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChoiceGroup {
    HeaderColor,
    SidebarColor,
    TabStyle,
    ThemeColor,
}

impl ChoiceGroup {
    pub const ALL: [ChoiceGroup; 4] =
        [ChoiceGroup::HeaderColor, ChoiceGroup::SidebarColor, ChoiceGroup::TabStyle, ChoiceGroup::ThemeColor];

    #[must_use]
    pub fn setting(self) -> Setting {
        match self {
            Self::HeaderColor => Setting::HeaderClass,
            Self::SidebarColor => Setting::SidebarClass,
            Self::TabStyle => Setting::PageTabsStyle,
            Self::ThemeColor => Setting::ThemeColor,
        }
    }

    #[must_use]
    pub fn target(self) -> Target {
        match self {
            Self::HeaderColor => Target::Header,
            Self::SidebarColor => Target::Sidebar,
            Self::TabStyle | Self::ThemeColor => Target::Body,
        }
    }

    /// Tab style and theme color swatches share one markup class; tell them
    /// apart by value prefix.
    #[must_use]
    pub fn classify_body_class(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with("body-tabs") {
            Some(Self::TabStyle)
        } else if value.starts_with("app-theme") {
            Some(Self::ThemeColor)
        } else {
            None
        }
    }
}

/// Boolean layout switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutToggle {
    FixedHeader,
    FixedSidebar,
    FixedFooter,
}

impl LayoutToggle {
    pub const ALL: [LayoutToggle; 3] = [LayoutToggle::FixedHeader, LayoutToggle::FixedSidebar, LayoutToggle::FixedFooter];

    /// Class flag added to [`Target::AppRoot`] while the toggle is on.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::FixedHeader => "fixed-header",
            Self::FixedSidebar => "fixed-sidebar",
            Self::FixedFooter => "fixed-footer",
        }
    }

    #[must_use]
    pub fn setting(self) -> Setting {
        match self {
            Self::FixedHeader => Setting::FixedHeader,
            Self::FixedSidebar => Setting::FixedSidebar,
            Self::FixedFooter => Setting::FixedFooter,
        }
    }

    /// Resolve a toggle from its configured class via the derived setting.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match Setting::from_class(class)? {
            Setting::FixedHeader => Some(Self::FixedHeader),
            Setting::FixedSidebar => Some(Self::FixedSidebar),
            Setting::FixedFooter => Some(Self::FixedFooter),
            _ => None,
        }
    }
}

/// Single-purpose buttons in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelButton {
    RestoreDefaults,
}

/// What clicking an option does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Choice(ChoiceGroup),
    Toggle(LayoutToggle),
    Button(PanelButton),
}

/// Index of a [`ThemeOption`] inside its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(pub usize);

/// One clickable control in the theme panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeOption {
    pub kind: OptionKind,
    /// Raw class string; empty means "template default".
    pub value: String,
}

impl ThemeOption {
    #[must_use]
    pub fn choice(group: ChoiceGroup, value: impl Into<String>) -> Self {
        Self { kind: OptionKind::Choice(group), value: value.into() }
    }

    #[must_use]
    pub fn toggle(toggle: LayoutToggle) -> Self {
        Self { kind: OptionKind::Toggle(toggle), value: toggle.class().to_owned() }
    }

    #[must_use]
    pub fn button(button: PanelButton) -> Self {
        Self { kind: OptionKind::Button(button), value: String::new() }
    }

    /// Class tokens this option applies.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        class_tokens(&self.value)
    }
}

/// Split a class attribute value into tokens.
pub fn class_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Collapse whitespace so `"bg-dark  header-text-light "` equals
/// `"bg-dark header-text-light"`.
#[must_use]
pub fn normalize_class_value(value: &str) -> String {
    class_tokens(value).collect::<Vec<_>>().join(" ")
}
