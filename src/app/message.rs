// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::ui::input;
use crate::ui::notifications::{self, Kind};
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(notifications::Message),
    /// Publish a sample toast of the given kind through the channel.
    Publish(Kind),
    ShowStandalone,
    HideStandalone,
    /// Close button of the standalone toast.
    StandaloneClosed,
    Sidebar(sidebar::Message),
    NameInput(input::Message),
    PasswordInput(input::Message),
    EmailInput(input::Message),
    Tick(Instant), // Periodic tick for toast timers
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
