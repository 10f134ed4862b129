// SPDX-License-Identifier: MPL-2.0
//! User interface components and shared styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes its state, a `Message` enum, an `update` returning an `Event`
//! for the parent, and a `view` function.
//!
//! # Components
//!
//! - [`notifications`] - Toast channel, container and lifecycle
//! - [`sidebar`] - Collapsible side panel with a nested accordion menu
//! - [`input`] - Text field with label, password toggle and validation text
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, inputs, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod icons;
pub mod input;
pub mod notifications;
pub mod sidebar;
pub mod styles;
pub mod theming;
