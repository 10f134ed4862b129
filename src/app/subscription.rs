// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the gallery.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription driving toast auto-dismiss.
///
/// Ticks only run while at least one timer is armed, so an idle gallery
/// does not wake up.
pub fn create_tick_subscription(has_armed_timers: bool, interval: Duration) -> Subscription<Message> {
    if has_armed_timers {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
