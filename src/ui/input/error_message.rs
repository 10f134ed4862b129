// SPDX-License-Identifier: MPL-2.0
//! Validation message shown under a field.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::{text, Text};
use iced::{Element, Theme};

pub fn view<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    Text::new(message)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}
