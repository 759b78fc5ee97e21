//! Anti-forgery token lookup from `document.cookie`.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use percent_encoding::percent_decode_str;

use crate::net::preference::CredentialSource;

/// Find `name` in a `Cookie`-style string and percent-decode its value.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        percent_decode_str(value).decode_utf8().ok().map(|v| v.into_owned())
    })
}

/// Reads the CSRF token from a named cookie on every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieCsrf {
    cookie_name: String,
}

impl CookieCsrf {
    #[must_use]
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self { cookie_name: cookie_name.into() }
    }
}

impl CredentialSource for CookieCsrf {
    fn csrf_token(&self) -> Option<String> {
        cookie_value(&document_cookies(), &self.cookie_name).filter(|t| !t.is_empty())
    }
}

fn document_cookies() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
