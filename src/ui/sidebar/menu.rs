// SPDX-License-Identifier: MPL-2.0
//! Sidebar menu tree.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Flat, top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            active: false,
        }
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Entry of the nested sub-menu. Entries with children expand in place;
/// entries without children are selectable leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMenuItem {
    pub id: String,
    pub label: String,
    pub children: Vec<SubMenuItem>,
}

impl SubMenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<SubMenuItem>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Rejects sibling entries sharing an id.
pub(crate) fn check_unique_items(items: &[MenuItem]) -> Result<()> {
    check_unique(items.iter().map(|item| item.id.as_str()), &[])
}

/// Recursively rejects sibling sub-menu entries sharing an id.
pub(crate) fn check_unique_tree(items: &[SubMenuItem], scope: &mut Vec<String>) -> Result<()> {
    check_unique(items.iter().map(|item| item.id.as_str()), scope)?;

    for item in items {
        scope.push(item.id.clone());
        check_unique_tree(&item.children, scope)?;
        scope.pop();
    }
    Ok(())
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, scope: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateMenuEntry {
                scope: Error::scope_label(scope),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Finds the entry `id` in the level addressed by `scope`.
pub(crate) fn find<'a>(items: &'a [SubMenuItem], scope: &[String], id: &str) -> Result<&'a SubMenuItem> {
    let unknown = || Error::UnknownMenuEntry {
        scope: Error::scope_label(scope),
        id: id.to_string(),
    };

    let mut level = items;
    for ancestor in scope {
        level = &level
            .iter()
            .find(|item| &item.id == ancestor)
            .ok_or_else(unknown)?
            .children;
    }

    level.iter().find(|item| item.id == id).ok_or_else(unknown)
}
