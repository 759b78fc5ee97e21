use super::*;
use crate::render::classes::ClassSet;
use crate::theme::controller::{ThemeCatalog, ThemePanelController};
use crate::theme::option::{ChoiceGroup, LayoutToggle, ThemeOption};
use crate::theme::preferences::ThemePreferences;

fn targets() -> ThemeTargets<ClassSet> {
    ThemeTargets {
        body: Some(ClassSet::parse("body-tabs-shadow app-theme-white")),
        header: Some(ClassSet::parse("app-header")),
        sidebar: None,
        app_root: Some(ClassSet::parse("app-container")),
    }
}

#[test]
fn outcome_lands_on_matching_targets() {
    let mut catalog = ThemeCatalog::new();
    let toggle = catalog.push(ThemeOption::toggle(LayoutToggle::FixedFooter));
    let swatch = catalog.push(ThemeOption::choice(ChoiceGroup::HeaderColor, "bg-info header-text-light"));
    let mut ctl = ThemePanelController::new(catalog, &ThemePreferences::default());
    let mut els = targets();

    apply_outcome(&ctl.click(toggle), &mut els);
    apply_outcome(&ctl.click(swatch), &mut els);

    assert_eq!(els.app_root.unwrap().to_attr(), "app-container fixed-footer");
    assert_eq!(els.header.unwrap().to_attr(), "app-header bg-info header-text-light");
}

#[test]
fn missing_target_is_skipped() {
    let mut catalog = ThemeCatalog::new();
    let swatch = catalog.push(ThemeOption::choice(ChoiceGroup::SidebarColor, "bg-dark sidebar-text-light"));
    let mut ctl = ThemePanelController::new(catalog, &ThemePreferences::default());
    let mut els = targets();

    apply_outcome(&ctl.click(swatch), &mut els);
    assert!(els.sidebar.is_none());
    assert_eq!(els.body.unwrap(), ClassSet::parse("body-tabs-shadow app-theme-white"));
}

#[test]
fn markers_follow_selection() {
    let mut catalog = ThemeCatalog::new();
    let a = catalog.push(ThemeOption::choice(ChoiceGroup::ThemeColor, "app-theme-white"));
    let b = catalog.push(ThemeOption::choice(ChoiceGroup::ThemeColor, "app-theme-gray"));
    let mut ctl = ThemePanelController::new(catalog, &ThemePreferences::default());
    let mut options = vec![(a, ClassSet::parse("swatch")), (b, ClassSet::parse("swatch"))];

    render_markers(ctl.state(), &mut options);
    assert!(options[0].1.has_class(OPTION_ACTIVE_CLASS));
    assert!(!options[1].1.has_class(OPTION_ACTIVE_CLASS));

    let _ = ctl.click(b);
    render_markers(ctl.state(), &mut options);
    assert!(!options[0].1.has_class(OPTION_ACTIVE_CLASS));
    assert!(options[1].1.has_class(OPTION_ACTIVE_CLASS));
}

#[test]
fn panel_class_tracks_state() {
    let mut drawer = ClassSet::parse("ui-theme-settings");
    render_panel(PanelState::Open, &mut drawer);
    assert!(drawer.has_class(PANEL_OPEN_CLASS));
    render_panel(PanelState::Closed, &mut drawer);
    assert_eq!(drawer.to_attr(), "ui-theme-settings");
}

#[test]
fn toggle_listens_on_its_checkbox_when_it_wraps_one() {
    // A click on a wrapping label dispatches on the label, then again on
    // the input; both bubble through the wrapper.
    let dispatch_paths = [vec!["label", "wrapper"], vec!["input", "label", "wrapper"]];
    let heard = |listener: &str| dispatch_paths.iter().filter(|path| path.contains(&listener)).count();

    let listener = toggle_listener("wrapper", Some("input"));
    assert_eq!(listener, "input");
    assert_eq!(heard(listener), 1);
    assert_eq!(heard("wrapper"), 2);
}

#[test]
fn toggle_without_checkbox_listens_on_itself() {
    assert_eq!(toggle_listener("switch", None), "switch");
}
