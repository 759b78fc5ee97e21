//! Render theme outcomes and markers onto panel and page elements.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::classes::ClassTarget;
use crate::theme::controller::{ClassChange, ThemeOutcome, ThemeState};
use crate::theme::option::{OptionId, Target};
use crate::theme::panel::PanelState;

/// Marker on the selected swatch/button of a group.
pub const OPTION_ACTIVE_CLASS: &str = "active";
/// Present on the drawer while it is open.
pub const PANEL_OPEN_CLASS: &str = "settings-open";

/// Page elements a theme change can land on. Missing elements are skipped.
#[derive(Clone, Debug)]
pub struct ThemeTargets<T> {
    pub body: Option<T>,
    pub header: Option<T>,
    pub sidebar: Option<T>,
    pub app_root: Option<T>,
}

impl<T> Default for ThemeTargets<T> {
    fn default() -> Self {
        Self { body: None, header: None, sidebar: None, app_root: None }
    }
}

impl<T> ThemeTargets<T> {
    pub fn get_mut(&mut self, target: Target) -> Option<&mut T> {
        match target {
            Target::Body => self.body.as_mut(),
            Target::Header => self.header.as_mut(),
            Target::Sidebar => self.sidebar.as_mut(),
            Target::AppRoot => self.app_root.as_mut(),
        }
    }
}

/// Apply one class change: removals first, then additions.
pub fn apply_change<T: ClassTarget>(element: &mut T, change: &ClassChange) {
    for class in &change.remove {
        element.remove_class(class);
    }
    for class in &change.add {
        element.add_class(class);
    }
}

/// Apply every class change in `outcome`.
pub fn apply_outcome<T: ClassTarget>(outcome: &ThemeOutcome, targets: &mut ThemeTargets<T>) {
    for change in &outcome.changes {
        match targets.get_mut(change.target) {
            Some(element) => apply_change(element, change),
            None => log::debug!("theme: no element for {:?}", change.target),
        }
    }
}

/// Set the active marker on every rendered option from `state`.
///
/// Only choice options can be selected, so toggles and buttons always end
/// up without the marker.
pub fn render_markers<T: ClassTarget>(state: &ThemeState, options: &mut [(OptionId, T)]) {
    for (id, element) in options.iter_mut() {
        element.set_class(OPTION_ACTIVE_CLASS, state.is_selected(*id));
    }
}

/// Element a toggle's click listener belongs on.
///
/// A toggle wrapping a checkbox listens on the checkbox: a click on a
/// wrapping `<label>` reaches the wrapper twice (once for the label, once
/// re-dispatched through the input) but reaches the input only once.
pub fn toggle_listener<T>(wrapper: T, checkbox: Option<T>) -> T {
    checkbox.unwrap_or(wrapper)
}

pub fn render_panel<T: ClassTarget>(state: PanelState, drawer: &mut T) {
    drawer.set_class(PANEL_OPEN_CLASS, state == PanelState::Open);
}
