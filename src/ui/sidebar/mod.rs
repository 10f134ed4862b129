// SPDX-License-Identifier: MPL-2.0
//! Collapsible side panel with a nested accordion menu.
//!
//! The panel slides over the right edge of the window above a dimmed
//! backdrop. It holds a flat menu (`MenuItem`) and a nested sub-menu
//! (`SubMenuItem`) in which each nesting level expands at most one entry.
//!
//! The parent owns the `Sidebar` and feeds it [`Message`]s; the sidebar
//! answers with an [`Event`] describing what the parent should react to.
//! All state is passed explicitly: there is no ambient context to look up.

mod expansion;
mod menu;
mod view;

pub use expansion::{Expansion, Scope};
pub use menu::{MenuItem, SubMenuItem};
pub use view::{view, ViewContext};

use crate::config::{DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
use crate::error::{Error, Result};

/// Messages emitted by the sidebar widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
    Toggle,
    /// Click on the dimmed area outside the panel.
    BackdropPressed,
    /// Click on the header close button.
    CloseButtonPressed,
    /// Click on a flat menu entry.
    ItemPressed(String),
    /// Click on a sub-menu entry at nesting level `scope`.
    SubMenuPressed { scope: Scope, id: String },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The panel was opened (`true`) or closed (`false`).
    OpenChanged(bool),
    /// A leaf entry was selected.
    ItemSelected(String),
}

/// Side panel state.
#[derive(Debug, Clone)]
pub struct Sidebar {
    open: bool,
    width: f32,
    title: Option<String>,
    footer: Option<String>,
    items: Vec<MenuItem>,
    sub_items: Vec<SubMenuItem>,
    expansion: Expansion,
}

impl Default for Sidebar {
    /// Closed sidebar with no entries.
    fn default() -> Self {
        Self {
            open: false,
            width: DEFAULT_SIDEBAR_WIDTH,
            title: None,
            footer: None,
            items: Vec::new(),
            sub_items: Vec::new(),
            expansion: Expansion::new(),
        }
    }
}

impl Sidebar {
    /// Creates a closed sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMenuEntry`] if two siblings share an id.
    pub fn new(items: Vec<MenuItem>, sub_items: Vec<SubMenuItem>) -> Result<Self> {
        menu::check_unique_items(&items)?;
        menu::check_unique_tree(&sub_items, &mut Vec::new())?;

        Ok(Self {
            items,
            sub_items,
            ..Self::default()
        })
    }

    /// Panel width in logical pixels, clamped to the supported range.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn sub_items(&self) -> &[SubMenuItem] {
        &self.sub_items
    }

    #[must_use]
    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    /// Id of the highlighted flat entry, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.id.as_str())
    }

    /// Processes a sidebar message and returns the corresponding event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMenuEntry`] if the message names an entry that
    /// is not part of the menu.
    pub fn update(&mut self, message: Message) -> Result<Event> {
        match message {
            Message::Open => Ok(self.set_open(true)),
            Message::Close | Message::BackdropPressed | Message::CloseButtonPressed => {
                Ok(self.set_open(false))
            }
            Message::Toggle => Ok(self.set_open(!self.open)),
            Message::ItemPressed(id) => {
                if !self.items.iter().any(|item| item.id == id) {
                    return Err(Error::UnknownMenuEntry {
                        scope: Error::scope_label(&[]),
                        id,
                    });
                }
                for item in &mut self.items {
                    item.active = item.id == id;
                }
                Ok(Event::ItemSelected(id))
            }
            Message::SubMenuPressed { scope, id } => {
                let entry = menu::find(&self.sub_items, &scope, &id)?;
                if entry.has_children() {
                    let expanded = self.expansion.toggle(&scope, &id);
                    log::debug!(
                        "sidebar: {} `{id}` in {}",
                        if expanded { "expanded" } else { "collapsed" },
                        Error::scope_label(&scope)
                    );
                    Ok(Event::None)
                } else {
                    Ok(Event::ItemSelected(id))
                }
            }
        }
    }

    fn set_open(&mut self, open: bool) -> Event {
        if self.open == open {
            return Event::None;
        }

        self.open = open;
        if open {
            // Reopening starts from a fully collapsed tree.
            self.expansion.reset();
        }
        Event::OpenChanged(open)
    }
}
