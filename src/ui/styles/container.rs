// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface for the sidebar panel.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Dimmed full-window layer behind a modal panel.
pub fn backdrop(theme: &Theme) -> container::Style {
    let alpha = if theme.extended_palette().is_dark {
        opacity::OVERLAY_STRONG
    } else {
        opacity::OVERLAY_MEDIUM
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Bordered card grouping related gallery controls.
pub fn section(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Thin horizontal separator between panel regions.
pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        ..Default::default()
    }
}
