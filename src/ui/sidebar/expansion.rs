// SPDX-License-Identifier: MPL-2.0
//! Accordion expansion state for nested sub-menus.
//!
//! Each nesting level is a *scope*, identified by the ids of its ancestors
//! (the top level is the empty path). A scope has at most one expanded child.
//! Scopes never read or write each other, so collapsing a parent leaves the
//! state of its descendants intact for when it is expanded again.

use std::collections::HashMap;

/// Path of ancestor ids identifying a nesting level. The root scope is `[]`.
pub type Scope = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: HashMap<Scope, String>,
}

impl Expansion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `id` within `scope`.
    ///
    /// Expanding a child implicitly collapses its expanded sibling, if any.
    /// Returns whether `id` is expanded afterwards.
    pub fn toggle(&mut self, scope: &[String], id: &str) -> bool {
        if self.is_expanded(scope, id) {
            self.expanded.remove(scope);
            false
        } else {
            self.expanded.insert(scope.to_vec(), id.to_string());
            true
        }
    }

    /// Currently expanded child of `scope`.
    #[must_use]
    pub fn expanded(&self, scope: &[String]) -> Option<&str> {
        self.expanded.get(scope).map(String::as_str)
    }

    #[must_use]
    pub fn is_expanded(&self, scope: &[String], id: &str) -> bool {
        self.expanded(scope) == Some(id)
    }

    /// Collapses every scope.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Number of scopes with an expanded child.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
