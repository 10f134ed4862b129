// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button for the main action of a section.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::INFO_600)),
            text_color: WHITE,
            border: Border {
                color: palette::INFO_900,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::INFO_900)),
            text_color: WHITE,
            border: Border {
                color: palette::INFO_900,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        },
        button::Status::Disabled => disabled(),
    }
}

/// Outlined neutral button. Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_600
            })),
            text_color,
            border: Border {
                color: palette::INFO_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Disabled => disabled(),
    }
}

/// Transparent icon button (close, clear, visibility toggle).
///
/// Shows a faint wash of `accent` on hover and press.
pub fn ghost(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.extended_palette().background.base.text;
        let wash = |alpha: f32| {
            Some(Background::Color(Color {
                a: alpha,
                ..accent
            }))
        };

        match status {
            button::Status::Active => button::Style {
                background: None,
                text_color,
                ..Default::default()
            },
            button::Status::Hovered => button::Style {
                background: wash(opacity::OVERLAY_SUBTLE),
                text_color,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Pressed => button::Style {
                background: wash(opacity::OVERLAY_MEDIUM),
                text_color,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Disabled => button::Style {
                background: None,
                text_color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..text_color
                },
                ..Default::default()
            },
        }
    }
}

/// Full-width sidebar entry. `active` entries keep the brand highlight.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let text_color = palette.background.base.text;

        let background = match (active, status) {
            (true, _) => Some(Background::Color(palette.primary.weak.color)),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(Color {
                    a: opacity::HOVER_WASH,
                    ..text_color
                }))
            }
            (false, _) => None,
        };

        button::Style {
            background,
            text_color: if active {
                palette.primary.weak.text
            } else {
                text_color
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::INFO_600);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn ghost_button_is_transparent_until_hovered() {
        let style_fn = ghost(palette::ERROR_600);

        let idle = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);

        assert!(idle.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn active_menu_item_is_highlighted_at_rest() {
        let active = menu_item(true)(&Theme::Light, button::Status::Active);
        let inactive = menu_item(false)(&Theme::Light, button::Status::Active);

        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
    }

    #[test]
    fn disabled_buttons_are_grayed_out() {
        let style = secondary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
