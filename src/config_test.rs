use super::*;

#[test]
fn empty_object_uses_defaults() {
    let cfg = PageConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PageConfig::default());
    assert_eq!(cfg.save_endpoint, "/save-theme-preference/");
    assert_eq!(cfg.csrf_cookie, "csrftoken");
    assert_eq!(cfg.csrf_header, "X-CSRFToken");
    assert!(!cfg.debug);
}

#[test]
fn persisted_values_are_read_flat() {
    let cfg = PageConfig::from_json(
        r#"{"header_class": "bg-dark header-text-light", "fixed_sidebar": true, "debug": true}"#,
    )
    .unwrap();
    assert_eq!(cfg.preferences.header_class, "bg-dark header-text-light");
    assert!(cfg.preferences.fixed_sidebar);
    assert_eq!(cfg.preferences.theme_color, "app-theme-white");
    assert!(cfg.debug);
}

#[test]
fn wiring_overrides_apply() {
    let cfg = PageConfig::from_json(r#"{"save_endpoint": "/accounts/theme/", "csrf_header": "X-CSRF-Token"}"#).unwrap();
    assert_eq!(cfg.save_endpoint, "/accounts/theme/");
    assert_eq!(cfg.csrf_header, "X-CSRF-Token");
    assert_eq!(cfg.csrf_cookie, DEFAULT_CSRF_COOKIE);
}

#[test]
fn wrong_shape_is_an_error() {
    assert!(matches!(PageConfig::from_json(r#"{"debug": "yes"}"#), Err(ConfigError::Json(_))));
    assert!(PageConfig::from_json("[]").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn window_config_is_missing_outside_the_browser() {
    assert!(matches!(PageConfig::from_window(DEFAULT_CONFIG_GLOBAL), Err(ConfigError::Missing(_))));
    assert_eq!(PageConfig::load(DEFAULT_CONFIG_GLOBAL), PageConfig::default());
}

#[test]
fn log_level_keeps_warnings_and_widens_in_debug() {
    let quiet = PageConfig::default();
    assert_eq!(quiet.log_level(), log::LevelFilter::Warn);
    assert!(log::Level::Warn <= quiet.log_level());

    let verbose = PageConfig::from_json(r#"{"debug": true}"#).unwrap();
    assert_eq!(verbose.log_level(), log::LevelFilter::Debug);
}
