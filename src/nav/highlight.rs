//! Active-state computation for the sidebar.
//!
//! DESIGN
//! ======
//! `compute_active_state` is pure: it always starts from an empty
//! `NavState`, so running it twice with the same path and tree gives the
//! same result. Every matching entry lights up together with its whole
//! ancestor chain; overlapping prefixes are not pruned to a single winner.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::collections::BTreeSet;

use super::href::{matches_path, normalize_href};
use super::menu::{EntryId, MenuTree, SubmenuId};

/// Declarative highlight state for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active_entries: BTreeSet<EntryId>,
    pub expanded_submenus: BTreeSet<SubmenuId>,
}

impl NavState {
    #[must_use]
    pub fn is_active(&self, id: EntryId) -> bool {
        self.active_entries.contains(&id)
    }

    #[must_use]
    pub fn is_expanded(&self, id: SubmenuId) -> bool {
        self.expanded_submenus.contains(&id)
    }

    /// Mark `entry` active and open every submenu above it.
    pub fn activate_with_ancestors(&mut self, tree: &MenuTree, entry: EntryId) {
        let mut current = entry;
        self.active_entries.insert(current);
        while let Some(parent) = tree.entry(current).and_then(|e| e.parent) {
            self.expanded_submenus.insert(parent);
            let Some(submenu) = tree.submenu(parent) else {
                break;
            };
            current = submenu.owner;
            self.active_entries.insert(current);
        }
    }
}

/// Compute which entries are active and which submenus are expanded for
/// `current_path`.
#[must_use]
pub fn compute_active_state(current_path: &str, tree: &MenuTree) -> NavState {
    let mut state = NavState::default();
    for (id, entry) in tree.entries() {
        let Some(href) = normalize_href(&entry.href) else {
            continue;
        };
        if matches_path(&href, current_path) {
            log::debug!("nav: {href} matches {current_path}");
            state.activate_with_ancestors(tree, id);
        }
    }
    state
}
