// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions without blocking
//! interaction. Producers and the container never reference each other: both
//! hold a clone of the same [`Channel`].
//!
//! # Components
//!
//! - [`notification`] - `Toast` payload, `Kind` and `Position`
//! - [`channel`] - publish/subscribe bus
//! - [`lifecycle`] - per-toast visible → dismissed state machine
//! - [`container`] - active collection, identifiers and timers
//! - [`toast`] - card and overlay widgets
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{self, Channel, Container, Toast};
//!
//! let channel = Channel::new();
//! let mut toasts = Container::new();
//! toasts.attach(&channel);
//!
//! // Anywhere a clone of the channel is held
//! channel.publish(Toast::success("Saved").with_title("Profile"));
//!
//! // After each update, move delivered payloads into the collection
//! toasts.receive(Instant::now());
//!
//! // In your view function
//! let overlay = notifications::overlay(&toasts, &i18n).map(Message::Toast);
//! ```
//!
//! # Behavior
//!
//! - Default duration 5 s; a zero duration never auto-dismisses
//! - No cap on visible toasts unless `with_max_visible` is set
//! - Default position: bottom-right corner

pub mod channel;
pub mod container;
pub mod lifecycle;
pub mod notification;
pub mod toast;

pub use channel::{Channel, SubscriberId};
pub use container::{Container, Message, ToastItem};
pub use lifecycle::{DismissReason, Lifecycle, Phase};
pub use notification::{Kind, KindColors, OnClose, Position, Toast, ToastId};
pub use toast::{card, overlay};
