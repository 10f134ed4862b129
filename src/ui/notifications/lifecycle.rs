// SPDX-License-Identifier: MPL-2.0
//! Per-toast visibility state machine.
//!
//! A toast is `Visible` until it is dismissed, either by the user, by its
//! auto-dismiss timer, or by a controlling parent forcing it hidden. All
//! three triggers go through [`Lifecycle::dismiss`], which is idempotent:
//! the timer is always disarmed and the completion callback runs at most
//! once per visible period.
//!
//! Time is passed in explicitly (`now: Instant`) so the host event loop's
//! tick drives expiry and tests stay deterministic.

use super::notification::OnClose;
use std::time::{Duration, Instant};

/// Visibility phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Dismissed,
}

/// What triggered a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The user pressed the close affordance.
    Closed,
    /// The auto-dismiss timer elapsed.
    Expired,
    /// A controlling parent forced visibility off.
    Hidden,
}

/// Visibility state, dismissal timer and completion callback of one toast.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    duration: Duration,
    deadline: Option<Instant>,
    on_close: Option<OnClose>,
}

impl Lifecycle {
    /// Starts a visible lifecycle, arming the timer when `duration > 0`.
    pub fn new(duration: Duration, on_close: Option<OnClose>, now: Instant) -> Self {
        let mut lifecycle = Self {
            phase: Phase::Visible,
            duration,
            deadline: None,
            on_close,
        };
        lifecycle.arm(now);
        lifecycle
    }

    /// Durations too large to represent as an `Instant` never fire.
    fn arm(&mut self, now: Instant) {
        self.deadline = if self.duration.is_zero() {
            None
        } else {
            now.checked_add(self.duration)
        };
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Instant at which the armed timer fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the timer fires, if armed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Transitions `Visible → Dismissed`.
    ///
    /// Returns `false` (and does nothing) if the toast is already dismissed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if self.phase == Phase::Dismissed {
            return false;
        }

        self.phase = Phase::Dismissed;
        self.deadline = None;
        log::debug!("toast dismissed ({reason:?})");

        if let Some(callback) = &self.on_close {
            callback.call();
        }
        true
    }

    /// Fires the timer if it has elapsed at `now`. Returns whether it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.dismiss(DismissReason::Expired),
            _ => false,
        }
    }

    /// Applies an externally controlled visibility flag.
    ///
    /// `true → false` dismisses (callback included) and disarms the timer;
    /// `false → true` makes the toast visible again with a fresh timer.
    /// Returns whether the phase changed.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> bool {
        match (self.phase, visible) {
            (Phase::Visible, false) => self.dismiss(DismissReason::Hidden),
            (Phase::Dismissed, true) => {
                self.phase = Phase::Visible;
                self.arm(now);
                log::debug!("toast re-shown, timer re-armed");
                true
            }
            _ => false,
        }
    }

    /// Disarms the timer and marks the toast dismissed without running the
    /// callback. Used when the owner discards the toast wholesale.
    pub fn cancel(&mut self) {
        self.phase = Phase::Dismissed;
        self.deadline = None;
    }
}
