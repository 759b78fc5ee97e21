use super::*;
use crate::nav::highlight::compute_active_state;
use crate::nav::menu::SubmenuId;

struct Fixture {
    tree: MenuTree,
    students: EntryId,
    fees: EntryId,
    reports: EntryId,
    students_sub: SubmenuId,
    fees_sub: SubmenuId,
    reports_sub: SubmenuId,
}

/// Students (#)  > /students/list
/// Fees (#)      > Reports (#) > /fees/reports/daily
fn fixture() -> Fixture {
    let mut tree = MenuTree::new();
    let students = tree.add_entry("#", None).unwrap();
    let students_sub = tree.add_submenu(students).unwrap();
    tree.add_entry("/students/list", Some(students_sub)).unwrap();
    let fees = tree.add_entry("#", None).unwrap();
    let fees_sub = tree.add_submenu(fees).unwrap();
    let reports = tree.add_entry("#", Some(fees_sub)).unwrap();
    let reports_sub = tree.add_submenu(reports).unwrap();
    tree.add_entry("/fees/reports/daily", Some(reports_sub)).unwrap();
    Fixture { tree, students, fees, reports, students_sub, fees_sub, reports_sub }
}

#[test]
fn opening_top_level_closes_other_top_level() {
    let f = fixture();
    let mut state = compute_active_state("/students/list", &f.tree);
    assert!(state.is_expanded(f.students_sub));

    assert!(toggle_submenu(&f.tree, &mut state, f.fees));
    assert!(state.is_expanded(f.fees_sub));
    assert!(!state.is_expanded(f.students_sub));
}

#[test]
fn nested_submenus_survive_accordion() {
    let f = fixture();
    let mut state = compute_active_state("/fees/reports/daily", &f.tree);
    assert!(state.is_expanded(f.reports_sub));

    // Students is inactive, so clicking it collapses Fees but keeps nested Reports.
    assert!(toggle_submenu(&f.tree, &mut state, f.students));
    assert!(state.is_expanded(f.students_sub));
    assert!(!state.is_expanded(f.fees_sub));
    assert!(state.is_expanded(f.reports_sub));
}

#[test]
fn clicking_active_top_level_only_toggles_itself() {
    let f = fixture();
    let mut state = compute_active_state("/students/list", &f.tree);
    state.expanded_submenus.insert(f.fees_sub);

    assert!(toggle_submenu(&f.tree, &mut state, f.students));
    assert!(!state.is_expanded(f.students_sub));
    assert!(state.is_expanded(f.fees_sub));
}

#[test]
fn nested_toggle_does_not_collapse_top_level() {
    let f = fixture();
    let mut state = NavState::default();
    state.expanded_submenus.insert(f.students_sub);
    state.expanded_submenus.insert(f.fees_sub);

    assert!(toggle_submenu(&f.tree, &mut state, f.reports));
    assert!(state.is_expanded(f.reports_sub));
    assert!(state.is_expanded(f.students_sub));
    assert!(state.is_expanded(f.fees_sub));
}

#[test]
fn navigable_entries_are_left_to_the_browser() {
    let f = fixture();
    let mut state = NavState::default();
    assert!(!toggle_submenu(&f.tree, &mut state, EntryId(1)));
    assert!(!toggle_submenu(&f.tree, &mut state, EntryId(99)));
    assert_eq!(state, NavState::default());
}
