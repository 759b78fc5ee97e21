//! Client-side behavior for the admin template's page chrome.
//!
//! The server renders the sidebar menu and the theme settings drawer; this
//! crate is compiled to WebAssembly and makes them interactive. It
//! highlights the menu entries matching the current path, expands and
//! collapses submenus, applies theme options to the page and persists each
//! choice through the backend's preference endpoint.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Menu tree, path matching and accordion state |
//! | [`theme`] | Theme options, palette, persisted preferences and the panel controller |
//! | [`render`] | Applies computed state to class lists |
//! | [`net`] | Preference save requests |
//! | [`config`] | Page-injected settings |
//! | [`notify`] | Optional toast notifications |
//! | [`util`] | Cookie and CSRF helpers |
//! | `dom` | Browser bootstrap (`hydrate` feature only) |

pub mod config;
pub mod nav;
pub mod net;
pub mod notify;
pub mod render;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

/// Page entry point. Call once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    // Logger first so config fallbacks are reported; narrowed once loaded.
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = config::PageConfig::load(config::DEFAULT_CONFIG_GLOBAL);
    log::set_max_level(config.log_level());
    dom::install(&config);
}
