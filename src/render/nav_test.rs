use super::*;
use crate::nav::{MenuTree, compute_active_state};
use crate::render::classes::ClassSet;

fn elements(tree: &MenuTree) -> NavElements<ClassSet> {
    NavElements {
        items: vec![ClassSet::new(); tree.entry_count()],
        links: vec![ClassSet::new(); tree.entry_count()],
        submenus: vec![ClassSet::new(); tree.submenu_count()],
    }
}

fn tree() -> MenuTree {
    let mut tree = MenuTree::new();
    let fees = tree.add_entry("#", None).unwrap();
    let sub = tree.add_submenu(fees).unwrap();
    tree.add_entry("/fees/collect", Some(sub)).unwrap();
    tree.add_entry("/settings", None).unwrap();
    tree
}

#[test]
fn active_chain_gets_classes() {
    let tree = tree();
    let mut els = elements(&tree);
    render_nav(&compute_active_state("/fees/collect", &tree), &mut els);

    assert!(els.items[0].has_class(ACTIVE_CLASS));
    assert!(els.links[0].has_class(ACTIVE_CLASS));
    assert!(els.items[1].has_class(ACTIVE_CLASS));
    assert!(!els.items[2].has_class(ACTIVE_CLASS));
    assert_eq!(els.submenus[0].to_attr(), "mm-collapse mm-show");
}

#[test]
fn rerender_clears_stale_marks() {
    let tree = tree();
    let mut els = elements(&tree);
    render_nav(&compute_active_state("/fees/collect", &tree), &mut els);
    render_nav(&compute_active_state("/settings", &tree), &mut els);

    assert!(!els.items[0].has_class(ACTIVE_CLASS));
    assert!(!els.links[1].has_class(ACTIVE_CLASS));
    assert!(els.items[2].has_class(ACTIVE_CLASS));
    assert_eq!(els.submenus[0].to_attr(), "mm-collapse");
}

#[test]
fn rendering_twice_is_idempotent() {
    let tree = tree();
    let state = compute_active_state("/fees/collect", &tree);
    let mut once = elements(&tree);
    render_nav(&state, &mut once);
    let mut twice = once.clone();
    render_nav(&state, &mut twice);

    assert_eq!(once.items, twice.items);
    assert_eq!(once.links, twice.links);
    assert_eq!(once.submenus, twice.submenus);
}
