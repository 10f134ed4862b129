// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icon module.
//!
//! Icons are stroke-only 24×24 SVG documents embedded as byte strings and
//! tinted at render time through the SVG style, so one asset serves both
//! themes and all four severity colors. Handles are cached in a `OnceLock`
//! on first access.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = icons::tinted(icons::x(), sizing::ICON_SM, palette::GRAY_600);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `x` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function backed by an inline SVG with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const DATA: &str = concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                $body,
                "</svg>"
            );
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
    "Info icon: circle with a lowercase i."
);
define_icon!(
    check_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
    "Check circle icon: circle with a checkmark."
);
define_icon!(
    alert_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#,
    "Alert circle icon: circle with an exclamation mark."
);
define_icon!(
    x_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#,
    "Cross circle icon: circle with a diagonal cross."
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(
    x,
    r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
    "Cross icon: two diagonal strokes."
);
define_icon!(
    eye,
    r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#,
    "Eye icon: open eye."
);
define_icon!(
    eye_off,
    r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><line x1="2" x2="22" y1="2" y2="22"/>"#,
    "Eye-off icon: eye crossed by a diagonal line."
);

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    chevron_right,
    r#"<path d="m9 18 6-6-6-6"/>"#,
    "Chevron pointing right."
);
define_icon!(
    chevron_down,
    r#"<path d="m6 9 6 6 6-6"/>"#,
    "Chevron pointing down."
);
define_icon!(
    menu,
    r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
    "Hamburger menu icon: three horizontal lines."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and tints it with a fixed color.
pub fn tinted(icon: Svg<'_>, size: f32, color: Color) -> Svg<'_> {
    sized(icon, size).style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Sizes an icon and tints it with the theme's text color.
pub fn themed(icon: Svg<'_>, size: f32) -> Svg<'_> {
    sized(icon, size).style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}
