// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering notifications.
//!
//! A toast is a small card with a kind-colored outline and icon, an optional
//! bold title, the message and an optional close button. The overlay stacks
//! one column per anchor position over the whole window.

use super::container::{Container as ToastContainer, Message};
use super::notification::{KindColors, Position, Toast};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::font::{Font, Weight};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders a single toast card.
///
/// The close button is shown only when the toast is closeable and `on_close`
/// is provided.
pub fn card<'a, M: Clone + 'a>(
    toast: &'a Toast,
    i18n: &'a I18n,
    on_close: Option<M>,
) -> Element<'a, M> {
    let colors = toast.kind().colors();

    let icon = Container::new(icons::tinted(
        toast.kind().icon(),
        sizing::ICON_MD,
        colors.accent,
    ))
    .padding(spacing::XXS);

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = toast.title() {
        body = body.push(
            Text::new(title)
                .size(typography::BODY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.text),
                }),
        );
    }
    body = body.push(
        Text::new(toast.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text),
            }),
    );

    // Layout: [icon] [title + message] [close]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(body);

    if let Some(message) = on_close.filter(|_| toast.is_closeable()) {
        let close = button(icons::tinted(icons::x(), sizing::ICON_SM, colors.accent))
            .on_press(message)
            .padding(spacing::XXS)
            .style(styles::button::ghost(colors.accent));
        content = content.push(styles::tooltip::styled(
            close,
            i18n.tr("toast-close-tooltip"),
            tooltip::Position::Left,
        ));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_MIN_WIDTH))
        .max_width(sizing::TOAST_MAX_WIDTH)
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_container_style(colors))
        .into()
}

/// Renders every active toast, grouped at its anchor position.
///
/// Within a group toasts stack without overlapping, newest last.
pub fn overlay<'a>(toasts: &'a ToastContainer, i18n: &'a I18n) -> Element<'a, Message> {
    let groups = toasts.grouped();

    if groups.is_empty() {
        // Empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let layers: Vec<Element<'a, Message>> = groups
        .into_iter()
        .map(|(position, items)| {
            let cards: Vec<Element<'a, Message>> = items
                .into_iter()
                .map(|item| card(item.toast(), i18n, Some(Message::Dismiss(item.id()))))
                .collect();
            anchored(position, Column::with_children(cards))
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn anchored<'a>(position: Position, column: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(
        column
            .spacing(spacing::XS)
            .align_x(position.horizontal()),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(position.horizontal())
    .align_y(position.vertical())
    .padding(spacing::MD)
    .into()
}

/// Style function for the toast card.
fn toast_container_style(colors: KindColors) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(colors.surface)),
        border: iced::Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use std::time::Instant;

    #[test]
    fn toast_container_style_uses_kind_colors() {
        let colors = Kind::Success.colors();
        let style = toast_container_style(colors);

        assert_eq!(style.border.color, colors.border);
        assert_eq!(style.text_color, Some(colors.text));
        assert!(style.background.is_some());
    }

    #[test]
    fn card_renders_with_and_without_close() {
        let i18n = I18n::default();
        let closeable = Toast::warning("Disk almost full").with_title("Storage");
        let fixed = Toast::info("Read only").with_closeable(false);

        let _with_close: Element<'_, Message> =
            card(&closeable, &i18n, Some(Message::Tick(Instant::now())));
        let _without: Element<'_, Message> = card(&fixed, &i18n, Some(Message::Tick(Instant::now())));
        let _no_handler: Element<'_, Message> = card(&closeable, &i18n, None);
    }

    #[test]
    fn overlay_renders_every_group() {
        let i18n = I18n::default();
        let mut toasts = ToastContainer::new();
        let now = Instant::now();
        for position in Position::ALL {
            toasts.push(Toast::new("hello").with_position(position), now);
        }

        let _element = overlay(&toasts, &i18n);
    }

    #[test]
    fn empty_overlay_renders() {
        let i18n = I18n::default();
        let toasts = ToastContainer::new();
        let _element = overlay(&toasts, &i18n);
    }
}
