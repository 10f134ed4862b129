// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme (dark tip on light windows and the reverse) so
//! the icon-only close and clear buttons stay labelled in both modes.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted surface for tooltip tips.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (surface, text_color) = if theme.extended_palette().is_dark {
        (palette::GRAY_50, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_50)
    };

    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::LG,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a themed tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(tooltip_container);

    tooltip(content, tip, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(theme: &Theme) -> Color {
        match tooltip_container(theme).background {
            Some(Background::Color(color)) => color,
            other => panic!("expected a color background, got {other:?}"),
        }
    }

    #[test]
    fn tip_inverts_the_window_theme() {
        assert_eq!(surface(&Theme::Light), palette::GRAY_900);
        assert_eq!(surface(&Theme::Dark), palette::GRAY_50);
    }

    #[test]
    fn tip_text_contrasts_with_surface() {
        let style = tooltip_container(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::GRAY_50));
    }

    #[test]
    fn styled_tooltip_accepts_any_element() {
        let _tip = styled::<()>(Text::new("x"), "label", tooltip::Position::Left);
    }
}
