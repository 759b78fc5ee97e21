//! Class-list seam between view-state and elements.
//!
//! `ClassTarget` is the only surface render code writes through. The
//! browser implements it on `web_sys::Element`; `ClassSet` is an in-memory
//! stand-in used by tests and by server-side callers.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

use std::collections::BTreeSet;

use crate::theme::option::class_tokens;

pub trait ClassTarget {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` so that its presence equals `on`.
    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// In-memory class list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `class` attribute value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self { classes: class_tokens(value).map(str::to_owned).collect() }
    }

    /// Space-joined classes in sorted order.
    #[must_use]
    pub fn to_attr(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassTarget for ClassSet {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}
