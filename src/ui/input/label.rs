// SPDX-License-Identifier: MPL-2.0
//! Field label with an optional required marker.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::font::{Font, Weight};
use iced::widget::{text, Row, Text};
use iced::{Element, Theme};

/// Renders `label`, followed by a red `*` when `required`.
pub fn view<'a, M: 'a>(label: &'a str, required: bool) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::XXS).push(
        Text::new(label).size(typography::BODY).font(Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        }),
    );

    if required {
        row = row.push(
            Text::new("*")
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    row.into()
}
