//! Color swatches shipped with the admin template.
//!
//! Each scheme pairs a background class (`bg-<key>`) with a text contrast
//! so labels stay readable on it. Header swatches apply
//! `bg-<key> header-text-<contrast>`; sidebar swatches apply
//! `bg-<key> sidebar-text-<contrast>`.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Foreground contrast for text drawn on a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contrast {
    Light,
    Dark,
}

impl Contrast {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// One named color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub key: &'static str,
    pub label: &'static str,
    pub text: Contrast,
    /// Plain Bootstrap color rather than a gradient.
    pub basic: bool,
}

const fn basic(key: &'static str, label: &'static str, text: Contrast) -> ColorScheme {
    ColorScheme { key, label, text, basic: true }
}

const fn gradient(key: &'static str, label: &'static str, text: Contrast) -> ColorScheme {
    ColorScheme { key, label, text, basic: false }
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    basic("primary", "Primary Blue", Contrast::Light),
    basic("secondary", "Secondary Gray", Contrast::Light),
    basic("success", "Success Green", Contrast::Light),
    basic("info", "Info Cyan", Contrast::Light),
    basic("warning", "Warning Yellow", Contrast::Dark),
    basic("danger", "Danger Red", Contrast::Light),
    basic("light", "Light", Contrast::Dark),
    basic("dark", "Dark", Contrast::Light),
    basic("focus", "Focus Purple", Contrast::Light),
    basic("alternate", "Alternate", Contrast::Light),
    gradient("vicious-stance", "Vicious Stance", Contrast::Light),
    gradient("midnight-bloom", "Midnight Bloom", Contrast::Light),
    gradient("night-sky", "Night Sky", Contrast::Light),
    gradient("slick-carbon", "Slick Carbon", Contrast::Light),
    gradient("asteroid", "Asteroid", Contrast::Light),
    gradient("royal", "Royal", Contrast::Light),
    gradient("warm-flame", "Warm Flame", Contrast::Dark),
    gradient("night-fade", "Night Fade", Contrast::Dark),
    gradient("sunny-morning", "Sunny Morning", Contrast::Dark),
    gradient("tempting-azure", "Tempting Azure", Contrast::Dark),
    gradient("amy-crisp", "Amy Crisp", Contrast::Dark),
    gradient("heavy-rain", "Heavy Rain", Contrast::Dark),
    gradient("mean-fruit", "Mean Fruit", Contrast::Dark),
    gradient("malibu-beach", "Malibu Beach", Contrast::Light),
    gradient("deep-blue", "Deep Blue", Contrast::Dark),
    gradient("ripe-malin", "Ripe Malin", Contrast::Light),
    gradient("arielle-smile", "Arielle Smile", Contrast::Light),
    gradient("plum-plate", "Plum Plate", Contrast::Light),
    gradient("happy-fisher", "Happy Fisher", Contrast::Dark),
    gradient("happy-itmeo", "Happy Itmeo", Contrast::Light),
    gradient("mixed-hopes", "Mixed Hopes", Contrast::Light),
    gradient("strong-bliss", "Strong Bliss", Contrast::Light),
    gradient("grow-early", "Grow Early", Contrast::Light),
    gradient("love-kiss", "Love Kiss", Contrast::Light),
    gradient("premium-dark", "Premium Dark", Contrast::Light),
    gradient("happy-green", "Happy Green", Contrast::Light),
];

/// Look up a scheme by key.
#[must_use]
pub fn scheme(key: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|s| s.key == key)
}

/// Text contrast for `key`; unknown keys default to light text.
#[must_use]
pub fn text_contrast(key: &str) -> Contrast {
    scheme(key).map_or(Contrast::Light, |s| s.text)
}

/// Class string a header swatch applies.
#[must_use]
pub fn header_class(scheme: &ColorScheme) -> String {
    format!("bg-{} header-text-{}", scheme.key, scheme.text.as_str())
}

/// Class string a sidebar swatch applies.
#[must_use]
pub fn sidebar_class(scheme: &ColorScheme) -> String {
    format!("bg-{} sidebar-text-{}", scheme.key, scheme.text.as_str())
}
