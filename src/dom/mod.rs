//! Browser bootstrap: read the server-rendered markup, render state, wire
//! click listeners. Requires a browser environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar and the theme panel are installed independently and share
//! nothing. A missing container only disables its own component.

pub mod element;
pub mod sidebar;
pub mod theme_panel;

use crate::config::PageConfig;
use crate::notify;

/// Install both components on the current document.
pub fn install(config: &PageConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::debug!("no document; nothing to install");
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_owned());

    sidebar::install(&document, &path);
    theme_panel::install(&document, config, notify::detect());
}
