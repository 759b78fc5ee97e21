//! Theme panel interactions.
//!
//! DESIGN
//! ======
//! `ThemePanelController` owns the option catalog and the view-state. Each
//! click mutates the state synchronously and returns a `ThemeOutcome`: the
//! class changes the render step must apply and the save requests to send
//! afterwards. Local state is authoritative; a failed save never rolls it
//! back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::{BTreeMap, BTreeSet};

use super::option::{
    ChoiceGroup, DEFAULT_TAB_STYLE, DEFAULT_THEME_COLOR, LayoutToggle, OptionId, OptionKind, PanelButton, Target,
    ThemeOption, class_tokens, normalize_class_value,
};
use super::palette::{self, COLOR_SCHEMES};
use super::panel::{self, PanelClick, PanelEffect, PanelState};
use super::preferences::ThemePreferences;
use crate::net::types::SavePreference;

// =============================================================================
// CATALOG
// =============================================================================

/// Ordered set of clickable options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeCatalog {
    options: Vec<ThemeOption>,
}

impl ThemeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog matching the template's stock panel.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for toggle in LayoutToggle::ALL {
            catalog.push(ThemeOption::toggle(toggle));
        }
        catalog.push(ThemeOption::choice(ChoiceGroup::HeaderColor, ""));
        for scheme in COLOR_SCHEMES {
            catalog.push(ThemeOption::choice(ChoiceGroup::HeaderColor, palette::header_class(scheme)));
        }
        catalog.push(ThemeOption::choice(ChoiceGroup::SidebarColor, ""));
        for scheme in COLOR_SCHEMES {
            catalog.push(ThemeOption::choice(ChoiceGroup::SidebarColor, palette::sidebar_class(scheme)));
        }
        catalog.push(ThemeOption::choice(ChoiceGroup::TabStyle, DEFAULT_TAB_STYLE));
        catalog.push(ThemeOption::choice(ChoiceGroup::TabStyle, "body-tabs-line"));
        catalog.push(ThemeOption::choice(ChoiceGroup::ThemeColor, DEFAULT_THEME_COLOR));
        catalog.push(ThemeOption::choice(ChoiceGroup::ThemeColor, "app-theme-gray"));
        catalog.push(ThemeOption::button(PanelButton::RestoreDefaults));
        catalog
    }

    pub fn push(&mut self, option: ThemeOption) -> OptionId {
        self.options.push(option);
        OptionId(self.options.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: OptionId) -> Option<&ThemeOption> {
        self.options.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &ThemeOption)> {
        self.options.iter().enumerate().map(|(i, o)| (OptionId(i), o))
    }

    pub fn in_group(&self, group: ChoiceGroup) -> impl Iterator<Item = (OptionId, &ThemeOption)> {
        self.iter().filter(move |(_, o)| o.kind == OptionKind::Choice(group))
    }

    /// First option in `group` whose class string equals `value`, ignoring
    /// whitespace differences.
    #[must_use]
    pub fn find_value(&self, group: ChoiceGroup, value: &str) -> Option<OptionId> {
        let wanted = normalize_class_value(value);
        self.in_group(group)
            .find(|(_, o)| normalize_class_value(&o.value) == wanted)
            .map(|(id, _)| id)
    }

    /// Append fallback options for every choice group this catalog lacks.
    ///
    /// Existing ids stay valid; fallback options are appended after them.
    #[must_use]
    pub fn with_fallback(mut self, fallback: &ThemeCatalog) -> Self {
        let missing: Vec<ChoiceGroup> = ChoiceGroup::ALL
            .into_iter()
            .filter(|g| self.in_group(*g).next().is_none())
            .collect();
        for (_, option) in fallback.iter() {
            if let OptionKind::Choice(group) = option.kind {
                if missing.contains(&group) {
                    self.push(option.clone());
                }
            }
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

// =============================================================================
// STATE + OUTCOME
// =============================================================================

/// Declarative view-state of the panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub panel: PanelState,
    /// Option carrying the active marker, per group.
    pub selected: BTreeMap<ChoiceGroup, OptionId>,
    /// Class string currently applied to each group's target.
    pub applied: BTreeMap<ChoiceGroup, String>,
    pub toggles: BTreeMap<LayoutToggle, bool>,
}

impl ThemeState {
    #[must_use]
    pub fn is_selected(&self, id: OptionId) -> bool {
        self.selected.values().any(|selected| *selected == id)
    }

    #[must_use]
    pub fn toggle(&self, toggle: LayoutToggle) -> bool {
        self.toggles.get(&toggle).copied().unwrap_or(false)
    }
}

/// Class edits for one target element. Removals apply before additions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassChange {
    pub target: Target,
    pub remove: Vec<String>,
    pub add: Vec<String>,
}

impl ClassChange {
    fn on(target: Target) -> Self {
        Self { target, remove: Vec::new(), add: Vec::new() }
    }
}

/// Result of one interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub changes: Vec<ClassChange>,
    pub saves: Vec<SavePreference>,
}

impl ThemeOutcome {
    fn merge(&mut self, other: ThemeOutcome) {
        self.changes.extend(other.changes);
        self.saves.extend(other.saves);
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct ThemePanelController {
    catalog: ThemeCatalog,
    state: ThemeState,
}

impl ThemePanelController {
    /// Build the controller and pre-mark options matching `prefs`.
    #[must_use]
    pub fn new(catalog: ThemeCatalog, prefs: &ThemePreferences) -> Self {
        let mut state = ThemeState::default();
        for group in ChoiceGroup::ALL {
            let value = normalize_class_value(prefs.choice(group));
            if let Some(id) = catalog.find_value(group, &value) {
                state.selected.insert(group, id);
            }
            state.applied.insert(group, value);
        }
        for toggle in LayoutToggle::ALL {
            state.toggles.insert(toggle, prefs.toggle(toggle));
        }
        Self { catalog, state }
    }

    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Route a click relative to the drawer through the open/closed machine.
    pub fn panel_click(&mut self, click: PanelClick) -> PanelEffect {
        let (next, effect) = panel::transition(self.state.panel, click);
        self.state.panel = next;
        effect
    }

    /// Handle a click on an option. Unknown ids produce an empty outcome.
    pub fn click(&mut self, id: OptionId) -> ThemeOutcome {
        let Some(option) = self.catalog.get(id) else {
            log::debug!("theme: click on unknown option {id:?}");
            return ThemeOutcome::default();
        };
        match option.kind {
            OptionKind::Choice(group) => {
                let value = option.value.clone();
                self.select(group, value, Some(id))
            }
            OptionKind::Toggle(toggle) => self.flip(toggle),
            OptionKind::Button(PanelButton::RestoreDefaults) => self.restore_defaults(),
        }
    }

    /// Reset tab style and theme color. Header, sidebar and layout toggles
    /// are left alone.
    pub fn restore_defaults(&mut self) -> ThemeOutcome {
        let mut outcome = ThemeOutcome::default();
        for (group, value) in [(ChoiceGroup::TabStyle, DEFAULT_TAB_STYLE), (ChoiceGroup::ThemeColor, DEFAULT_THEME_COLOR)] {
            let id = self.catalog.find_value(group, value);
            outcome.merge(self.select(group, value.to_owned(), id));
        }
        outcome
    }

    fn select(&mut self, group: ChoiceGroup, value: String, id: Option<OptionId>) -> ThemeOutcome {
        let mut remove: BTreeSet<String> = self
            .catalog
            .in_group(group)
            .flat_map(|(_, o)| o.tokens().map(str::to_owned).collect::<Vec<_>>())
            .collect();
        if let Some(applied) = self.state.applied.get(&group) {
            remove.extend(class_tokens(applied).map(str::to_owned));
        }

        let mut change = ClassChange::on(group.target());
        change.remove = remove.into_iter().collect();
        change.add = class_tokens(&value).map(str::to_owned).collect();

        match id {
            Some(id) => {
                self.state.selected.insert(group, id);
            }
            None => {
                self.state.selected.remove(&group);
            }
        }
        self.state.applied.insert(group, normalize_class_value(&value));
        log::debug!("theme: {group:?} -> {value:?}");

        ThemeOutcome { changes: vec![change], saves: vec![SavePreference::choice(group, value)] }
    }

    fn flip(&mut self, toggle: LayoutToggle) -> ThemeOutcome {
        let enabled = !self.state.toggle(toggle);
        self.state.toggles.insert(toggle, enabled);

        let mut change = ClassChange::on(Target::AppRoot);
        if enabled {
            change.add.push(toggle.class().to_owned());
        } else {
            change.remove.push(toggle.class().to_owned());
        }
        log::debug!("theme: {toggle:?} -> {enabled}");

        ThemeOutcome { changes: vec![change], saves: vec![SavePreference::toggle(toggle, enabled)] }
    }
}
