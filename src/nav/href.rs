//! Href normalization and path matching for sidebar links.

#[cfg(test)]
#[path = "href_test.rs"]
mod href_test;

use url::{ParseError, Url};

/// Root path; exempt from prefix matching.
pub const ROOT_PATH: &str = "/";

/// Base for resolving relative hrefs; only its path part survives.
const RESOLVE_BASE: &str = "http://localhost/";

/// Reduce a rendered `href` to a comparable path.
///
/// Every spelling of a link resolves to the same path: absolute URLs,
/// scheme-relative `//host/path` and plain paths all drop scheme, host,
/// query and fragment, and dot segments are resolved. So
/// `https://example.com/fees?tab=1`, `//example.com/fees` and `/fees` all
/// become `/fees`. Returns `None` for toggle-only hrefs (`"#"`, empty,
/// fragment-only) and for hostless schemes such as `mailto:` or
/// `javascript:`.
#[must_use]
pub fn normalize_href(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let url = match Url::parse(href) {
        Ok(url) if url.has_host() => url,
        Ok(_) => return None,
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RESOLVE_BASE).and_then(|base| base.join(href)).ok()?
        }
        Err(_) => return None,
    };
    Some(url.path().to_owned())
}

/// Whether a normalized href is active for `current_path`.
///
/// Exact equality always matches. Otherwise any href that `current_path`
/// starts with matches, except the root `/`, which would match everything.
/// The prefix test is a plain string prefix with no segment boundary.
#[must_use]
pub fn matches_path(normalized_href: &str, current_path: &str) -> bool {
    normalized_href == current_path
        || (normalized_href != ROOT_PATH && current_path.starts_with(normalized_href))
}
