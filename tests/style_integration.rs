// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, text_input};
    use iced::Theme;
    use iced_kit::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_kit::ui::notifications::Kind;
    use iced_kit::ui::styles::{button, container, input};
    use iced_kit::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, button_widget::Status::Active);
        let _ = button::secondary(&theme, button_widget::Status::Hovered);
        let _ = button::ghost(palette::GRAY_400)(&theme, button_widget::Status::Pressed);
        let _ = button::menu_item(true)(&theme, button_widget::Status::Active);
        let _ = container::panel(&theme);
        let _ = container::backdrop(&theme);
        let _ = container::section(&theme);
        let _ = input::field(true)(&theme, text_input::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;

        assert!(sizing::TOAST_MIN_WIDTH < sizing::TOAST_MAX_WIDTH);
        assert!(sizing::ICON_SM < sizing::ICON_MD);
    }

    #[test]
    fn severity_styles_are_distinct() {
        let accents: Vec<_> = Kind::ALL.iter().map(|kind| kind.colors().accent).collect();
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
    }
}
