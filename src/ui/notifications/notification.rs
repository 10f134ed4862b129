// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Toast` payload handed to the channel, its `Kind`
//! and anchor `Position`, and the identifier the container assigns on arrival.

use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::Svg;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of an active toast, unique for the lifetime of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity of a toast. Determines icon and color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something needs attention but nothing failed (yellow).
    Warning,
    /// Operation failed (red).
    Error,
}

/// Color treatment for one severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindColors {
    /// Card background.
    pub surface: Color,
    /// Card outline.
    pub border: Color,
    /// Title and message text.
    pub text: Color,
    /// Icon and close affordance.
    pub accent: Color,
}

impl Kind {
    /// All kinds in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Info, Kind::Success, Kind::Warning, Kind::Error];

    /// Returns the status icon for this kind (untinted).
    pub fn icon<'a>(self) -> Svg<'a> {
        match self {
            Kind::Info => icons::info(),
            Kind::Success => icons::check_circle(),
            Kind::Warning => icons::alert_circle(),
            Kind::Error => icons::x_circle(),
        }
    }

    /// Returns the fixed color treatment for this kind.
    #[must_use]
    pub fn colors(self) -> KindColors {
        match self {
            Kind::Info => KindColors {
                surface: palette::INFO_50,
                border: palette::INFO_200,
                text: palette::INFO_900,
                accent: palette::INFO_600,
            },
            Kind::Success => KindColors {
                surface: palette::SUCCESS_50,
                border: palette::SUCCESS_200,
                text: palette::SUCCESS_900,
                accent: palette::SUCCESS_600,
            },
            Kind::Warning => KindColors {
                surface: palette::WARNING_50,
                border: palette::WARNING_200,
                text: palette::WARNING_900,
                accent: palette::WARNING_600,
            },
            Kind::Error => KindColors {
                surface: palette::ERROR_50,
                border: palette::ERROR_200,
                text: palette::ERROR_900,
                accent: palette::ERROR_600,
            },
        }
    }
}

/// Screen anchor a toast is stacked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    #[default]
    BottomRight,
    BottomCenter,
}

impl Position {
    /// All anchors in rendering order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }

    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => Horizontal::Center,
            Position::TopRight | Position::BottomRight => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        if self.is_top() {
            Vertical::Top
        } else {
            Vertical::Bottom
        }
    }
}

/// Zero-argument completion callback run when a toast is dismissed.
#[derive(Clone)]
pub struct OnClose(Rc<dyn Fn()>);

impl OnClose {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub(crate) fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for OnClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnClose(..)")
    }
}

/// A notification payload, as handed to [`Channel::publish`](super::Channel::publish).
///
/// Defaults: kind `Info`, position bottom-right, 5000 ms auto-dismiss,
/// closeable, no title, no callback. An empty message is accepted and
/// renders blank.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    kind: Kind,
    position: Position,
    duration: Duration,
    title: Option<String>,
    closeable: bool,
    on_close: Option<OnClose>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: Kind::default(),
            position: Position::default(),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            title: None,
            closeable: true,
            on_close: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(Kind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(Kind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(Kind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(Kind::Error)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` disables auto-dismiss.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Millisecond variant of [`Toast::with_duration`].
    #[must_use]
    pub fn with_duration_ms(self, millis: u64) -> Self {
        self.with_duration(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    /// Registers a callback run once when the toast is dismissed.
    #[must_use]
    pub fn with_on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(OnClose::new(callback));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn is_closeable(&self) -> bool {
        self.closeable
    }

    /// Whether a positive duration was given.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    pub(crate) fn callback(&self) -> Option<OnClose> {
        self.on_close.clone()
    }
}
