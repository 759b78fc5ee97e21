use super::*;

// =============================================================
// Setting
// =============================================================

#[test]
fn setting_names_round_trip_through_from_str() {
    for setting in Setting::ALL {
        assert_eq!(setting.as_str().parse::<Setting>().unwrap(), setting);
    }
    assert!("nope".parse::<Setting>().is_err());
}

#[test]
fn setting_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&Setting::PageTabsStyle).unwrap(), "\"page_tabs_style\"");
    assert_eq!(Setting::HeaderClass.to_string(), "header_class");
}

#[test]
fn setting_from_class_uses_snake_case() {
    assert_eq!(Setting::from_class("fixed-header"), Some(Setting::FixedHeader));
    assert_eq!(Setting::from_class("fixed-footer "), Some(Setting::FixedFooter));
    assert_eq!(Setting::from_class("closed-sidebar"), None);
}

// =============================================================
// ChoiceGroup
// =============================================================

#[test]
fn choice_groups_map_to_settings_and_targets() {
    assert_eq!(ChoiceGroup::HeaderColor.setting(), Setting::HeaderClass);
    assert_eq!(ChoiceGroup::SidebarColor.target(), Target::Sidebar);
    assert_eq!(ChoiceGroup::TabStyle.target(), Target::Body);
    assert_eq!(ChoiceGroup::ThemeColor.setting(), Setting::ThemeColor);
}

#[test]
fn body_classes_classify_by_prefix() {
    assert_eq!(ChoiceGroup::classify_body_class("body-tabs-line"), Some(ChoiceGroup::TabStyle));
    assert_eq!(ChoiceGroup::classify_body_class("app-theme-gray"), Some(ChoiceGroup::ThemeColor));
    assert_eq!(ChoiceGroup::classify_body_class("bg-primary"), None);
}

// =============================================================
// LayoutToggle
// =============================================================

#[test]
fn layout_toggle_resolves_from_class() {
    for toggle in LayoutToggle::ALL {
        assert_eq!(LayoutToggle::from_class(toggle.class()), Some(toggle));
    }
    assert_eq!(LayoutToggle::from_class("header-class"), None);
}

// =============================================================
// Class tokens
// =============================================================

#[test]
fn option_tokens_split_on_whitespace() {
    let option = ThemeOption::choice(ChoiceGroup::HeaderColor, " bg-dark  header-text-light ");
    assert_eq!(option.tokens().collect::<Vec<_>>(), vec!["bg-dark", "header-text-light"]);
    assert_eq!(ThemeOption::choice(ChoiceGroup::HeaderColor, "").tokens().count(), 0);
}

#[test]
fn normalize_class_value_collapses_whitespace() {
    assert_eq!(normalize_class_value("  bg-dark \n header-text-light"), "bg-dark header-text-light");
    assert_eq!(normalize_class_value(""), "");
}
