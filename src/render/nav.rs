//! Render `NavState` onto sidebar elements.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::classes::ClassTarget;
use crate::nav::{EntryId, NavState, SubmenuId};

/// Marks an active list item and its link.
pub const ACTIVE_CLASS: &str = "mm-active";
/// Present on every collapsible submenu.
pub const COLLAPSE_CLASS: &str = "mm-collapse";
/// Present on expanded submenus.
pub const EXPANDED_CLASS: &str = "mm-show";

/// Sidebar elements indexed by `EntryId` / `SubmenuId`.
#[derive(Clone, Debug)]
pub struct NavElements<T> {
    /// List item per entry.
    pub items: Vec<T>,
    /// Anchor per entry.
    pub links: Vec<T>,
    /// Nested list per submenu.
    pub submenus: Vec<T>,
}

impl<T> Default for NavElements<T> {
    fn default() -> Self {
        Self { items: Vec::new(), links: Vec::new(), submenus: Vec::new() }
    }
}

/// Apply `state` to `elements`. Every class is set from state, so repeated
/// renders converge on the same result.
pub fn render_nav<T: ClassTarget>(state: &NavState, elements: &mut NavElements<T>) {
    for (i, item) in elements.items.iter_mut().enumerate() {
        item.set_class(ACTIVE_CLASS, state.is_active(EntryId(i)));
    }
    for (i, link) in elements.links.iter_mut().enumerate() {
        link.set_class(ACTIVE_CLASS, state.is_active(EntryId(i)));
    }
    for (i, submenu) in elements.submenus.iter_mut().enumerate() {
        submenu.add_class(COLLAPSE_CLASS);
        submenu.set_class(EXPANDED_CLASS, state.is_expanded(SubmenuId(i)));
    }
}
