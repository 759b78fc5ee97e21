//! Click handling for toggle-only sidebar entries.
//!
//! Top-level submenus behave like an accordion: opening one closes the
//! other open top-level submenus. Nested submenus are left alone. This
//! only runs on click, never during the initial highlight pass.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use super::highlight::NavState;
use super::menu::{EntryId, MenuTree};

/// Apply a click on `entry` to `state`.
///
/// Returns `false` when the entry navigates (or does not exist) and the
/// click should be left to the browser.
pub fn toggle_submenu(tree: &MenuTree, state: &mut NavState, entry: EntryId) -> bool {
    let Some(clicked) = tree.entry(entry) else {
        return false;
    };
    if !clicked.is_toggle_only() {
        return false;
    }

    let own: Vec<_> = tree.submenus_of(entry).collect();
    if clicked.depth == 0 && !state.is_active(entry) {
        state
            .expanded_submenus
            .retain(|sub| own.contains(sub) || !tree.is_top_level_submenu(*sub));
    }
    for sub in own {
        if !state.expanded_submenus.remove(&sub) {
            state.expanded_submenus.insert(sub);
        }
    }
    true
}
