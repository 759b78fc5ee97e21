use super::*;

#[test]
fn palette_has_ten_basic_colors() {
    assert_eq!(COLOR_SCHEMES.iter().filter(|s| s.basic).count(), 10);
    assert!(COLOR_SCHEMES.iter().take(10).all(|s| s.basic));
}

#[test]
fn scheme_keys_are_unique() {
    for (i, a) in COLOR_SCHEMES.iter().enumerate() {
        for b in &COLOR_SCHEMES[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}

#[test]
fn unknown_key_defaults_to_light_text() {
    assert_eq!(text_contrast("warning"), Contrast::Dark);
    assert_eq!(text_contrast("not-a-color"), Contrast::Light);
}

#[test]
fn swatch_classes_pair_background_with_contrast() {
    let warning = scheme("warning").unwrap();
    assert_eq!(header_class(warning), "bg-warning header-text-dark");
    let royal = scheme("royal").unwrap();
    assert_eq!(sidebar_class(royal), "bg-royal sidebar-text-light");
}
