// SPDX-License-Identifier: MPL-2.0
//! `iced_kit` is a small component kit for the Iced GUI framework.
//!
//! It provides toast notifications with a publish/subscribe channel, a
//! collapsible sidebar with a nested accordion menu, and form inputs, along
//! with a gallery application that exercises all of them.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
