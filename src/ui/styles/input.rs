// SPDX-License-Identifier: MPL-2.0
//! Text field styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Field style. `invalid` fields keep a red outline in every state.
pub fn field(invalid: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let palette = theme.extended_palette();

        let (background, border_color, width) = match status {
            Status::Active | Status::Hovered => (
                palette.background.base.color,
                palette.background.strong.color,
                border::WIDTH_SM,
            ),
            Status::Focused { .. } => (
                palette.background.base.color,
                palette.primary.strong.color,
                border::WIDTH_MD,
            ),
            Status::Disabled => (
                palette.background.weak.color,
                palette.background.strong.color,
                border::WIDTH_SM,
            ),
        };

        let value = if matches!(status, Status::Disabled) {
            palette.background.strong.text
        } else {
            palette.background.base.text
        };

        Style {
            background: background.into(),
            border: Border {
                color: if invalid {
                    palette::ERROR_500
                } else {
                    border_color
                },
                width,
                radius: radius::SM.into(),
            },
            icon: palette.background.weak.text,
            placeholder: palette.background.strong.text,
            value,
            selection: palette.primary.weak.color,
        }
    }
}
