//! Sidebar navigation highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! `menu` models the server-rendered tree, `href` holds the matching rules,
//! `highlight` computes the per-page state and `accordion` handles clicks on
//! toggle-only entries. None of these touch the DOM; see `render` and `dom`.

pub mod accordion;
pub mod highlight;
pub mod href;
pub mod menu;

pub use highlight::{NavState, compute_active_state};
pub use menu::{EntryId, MenuEntry, MenuTree, SubmenuId};
