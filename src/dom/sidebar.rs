//! Sidebar highlighter installation.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::element::{contains, on_click, query_all};
use crate::nav::accordion::toggle_submenu;
use crate::nav::{EntryId, MenuTree, NavState, SubmenuId, compute_active_state};
use crate::render::nav::{NavElements, render_nav};

pub const MENU_SELECTOR: &str = ".vertical-nav-menu";

struct Sidebar {
    tree: MenuTree,
    elements: NavElements<Element>,
    state: NavState,
}

/// Highlight the entries matching `current_path` and make toggle-only
/// entries open their submenus on click.
pub fn install(document: &Document, current_path: &str) {
    let Some(root) = document.query_selector(MENU_SELECTOR).ok().flatten() else {
        log::debug!("sidebar: {MENU_SELECTOR} not found");
        return;
    };

    let (tree, mut elements) = read_menu(&root);
    let state = compute_active_state(current_path, &tree);
    render_nav(&state, &mut elements);
    log::debug!(
        "sidebar: {} entries, {} active for {current_path}",
        tree.entry_count(),
        state.active_entries.len()
    );

    let toggles: Vec<(EntryId, Element)> = tree
        .entries()
        .filter(|(_, entry)| entry.is_toggle_only())
        .filter_map(|(id, _)| elements.links.get(id.0).cloned().map(|link| (id, link)))
        .collect();

    let sidebar = Rc::new(RefCell::new(Sidebar { tree, elements, state }));
    for (id, link) in toggles {
        let sidebar = Rc::clone(&sidebar);
        on_click(&link, move |event| {
            let mut guard = sidebar.borrow_mut();
            let sb = &mut *guard;
            if toggle_submenu(&sb.tree, &mut sb.state, id) {
                event.prevent_default();
                render_nav(&sb.state, &mut sb.elements);
            }
        });
    }
}

/// Flatten `ul > li > a` markup into a `MenuTree`.
///
/// Each anchor's closest `li` is its item. An item whose parent list is not
/// the menu root sits in a submenu owned by that list's closest `li`.
/// Items with more than one anchor keep only the first.
fn read_menu(root: &Element) -> (MenuTree, NavElements<Element>) {
    let mut tree = MenuTree::new();
    let mut elements = NavElements::default();

    for link in query_all(root, "a") {
        let Some(item) = link.closest("li").ok().flatten() else {
            continue;
        };
        if !contains(root, &item) || elements.items.contains(&item) {
            continue;
        }
        let parent = item
            .parent_element()
            .filter(|list| list != root)
            .and_then(|list| submenu_for(&mut tree, &mut elements, root, list));
        let href = link.get_attribute("href").unwrap_or_default();
        if tree.add_entry(href, parent).is_err() {
            continue;
        }
        elements.items.push(item);
        elements.links.push(link);
    }
    (tree, elements)
}

fn submenu_for(
    tree: &mut MenuTree,
    elements: &mut NavElements<Element>,
    root: &Element,
    list: Element,
) -> Option<SubmenuId> {
    if let Some(index) = elements.submenus.iter().position(|s| *s == list) {
        return Some(SubmenuId(index));
    }
    let owner_item = list.parent_element()?.closest("li").ok().flatten()?;
    if !contains(root, &owner_item) {
        return None;
    }
    let owner = elements.items.iter().position(|i| *i == owner_item)?;
    let id = tree.add_submenu(EntryId(owner)).ok()?;
    elements.submenus.push(list);
    Some(id)
}
