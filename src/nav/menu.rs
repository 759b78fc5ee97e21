//! Sidebar menu model.
//!
//! DESIGN
//! ======
//! The server renders the menu as nested `ul > li > a` markup. Here it is
//! flattened into an arena: every list item + link pair is one `MenuEntry`,
//! every nested list is one `Submenu` owned by the entry whose item holds it.
//! Parents and owners must be added before their children, so walking the
//! ancestor chain always terminates.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Index of a [`MenuEntry`] inside its [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub usize);

/// Index of a [`Submenu`] inside its [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmenuId(pub usize);

/// One navigable (or toggle-only) sidebar item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Raw `href` as rendered. `"#"` or empty means toggle-only.
    pub href: String,
    /// Nesting level; 0 for top-level items.
    pub depth: usize,
    /// Submenu this entry lives in, if any.
    pub parent: Option<SubmenuId>,
}

impl MenuEntry {
    /// Whether this entry only opens/closes a submenu instead of navigating.
    #[must_use]
    pub fn is_toggle_only(&self) -> bool {
        let href = self.href.trim();
        href.is_empty() || href == "#"
    }
}

/// A collapsible nested list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submenu {
    /// Entry whose list item contains this submenu.
    pub owner: EntryId,
}

/// Error returned when a parent or owner reference does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("unknown submenu: {0:?}")]
    UnknownSubmenu(SubmenuId),
    #[error("unknown entry: {0:?}")]
    UnknownEntry(EntryId),
}

/// Arena of entries and submenus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
    submenus: Vec<Submenu>,
}

impl MenuTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, optionally inside an existing submenu.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSubmenu` if `parent` was not added to this tree.
    pub fn add_entry(&mut self, href: impl Into<String>, parent: Option<SubmenuId>) -> Result<EntryId, MenuError> {
        let depth = match parent {
            Some(sub) => {
                let owner = self.submenu(sub).ok_or(MenuError::UnknownSubmenu(sub))?.owner;
                self.entries[owner.0].depth + 1
            }
            None => 0,
        };
        let id = EntryId(self.entries.len());
        self.entries.push(MenuEntry { href: href.into(), depth, parent });
        Ok(id)
    }

    /// Add a submenu owned by an existing entry.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntry` if `owner` was not added to this tree.
    pub fn add_submenu(&mut self, owner: EntryId) -> Result<SubmenuId, MenuError> {
        if self.entry(owner).is_none() {
            return Err(MenuError::UnknownEntry(owner));
        }
        let id = SubmenuId(self.submenus.len());
        self.submenus.push(Submenu { owner });
        Ok(id)
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.get(id.0)
    }

    #[must_use]
    pub fn submenu(&self, id: SubmenuId) -> Option<&Submenu> {
        self.submenus.get(id.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &MenuEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    pub fn submenus(&self) -> impl Iterator<Item = (SubmenuId, &Submenu)> {
        self.submenus.iter().enumerate().map(|(i, s)| (SubmenuId(i), s))
    }

    /// Submenus directly owned by `entry`.
    pub fn submenus_of(&self, entry: EntryId) -> impl Iterator<Item = SubmenuId> + '_ {
        self.submenus()
            .filter(move |(_, s)| s.owner == entry)
            .map(|(id, _)| id)
    }

    /// A submenu is top-level when its owner sits at depth 0.
    #[must_use]
    pub fn is_top_level_submenu(&self, id: SubmenuId) -> bool {
        self.submenu(id)
            .and_then(|s| self.entry(s.owner))
            .is_some_and(|owner| owner.depth == 0)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn submenu_count(&self) -> usize {
        self.submenus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
