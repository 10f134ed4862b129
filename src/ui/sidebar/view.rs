// SPDX-License-Identifier: MPL-2.0
//! Sidebar rendering.

use super::{Message, Sidebar, SubMenuItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, opaque, scrollable, text, tooltip, Column, Container, Row, Stack, Text,
};
use iced::alignment::{Horizontal, Vertical};
use iced::{Element, Length, Padding};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sidebar: &'a Sidebar,
}

/// Renders the backdrop and panel, or nothing while closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.sidebar.is_open() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let backdrop = mouse_area(
        Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut panel = Column::new()
        .push(header(&ctx))
        .push(divider())
        .push(
            scrollable(content(&ctx))
                .width(Length::Fill)
                .height(Length::Fill),
        );
    if let Some(label) = ctx.sidebar.footer() {
        panel = panel.push(footer(label));
    }

    let panel = Container::new(panel)
        .width(Length::Fixed(ctx.sidebar.width()))
        .height(Length::Fill)
        .style(styles::container::panel);

    let anchored = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right);

    Stack::new().push(backdrop).push(anchored).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.sidebar.title().unwrap_or_default()).size(typography::TITLE_SM);

    let close = button(icons::themed(icons::x(), sizing::ICON_MD))
        .on_press(Message::CloseButtonPressed)
        .padding(spacing::XS)
        .style(styles::button::ghost(palette::GRAY_400));

    Row::new()
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .push(Container::new(title).width(Length::Fill))
        .push(styles::tooltip::styled(
            close,
            ctx.i18n.tr("sidebar-close-tooltip"),
            tooltip::Position::Left,
        ))
        .into()
}

fn content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::MD);

    for item in ctx.sidebar.items() {
        column = column.push(
            button(Text::new(item.label.as_str()).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::menu_item(item.active))
                .on_press(Message::ItemPressed(item.id.clone())),
        );
    }

    if !ctx.sidebar.sub_items().is_empty() {
        if !ctx.sidebar.items().is_empty() {
            column = column.push(Container::new(divider()).padding([spacing::XS, 0.0]));
        }
        column = column.push(sub_menu(ctx, ctx.sidebar.sub_items(), Vec::new()));
    }

    column.into()
}

/// Renders one nesting level. Children of an entry are rendered only while
/// it is expanded in `scope`.
fn sub_menu<'a>(
    ctx: &ViewContext<'a>,
    items: &'a [SubMenuItem],
    scope: Vec<String>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    for item in items {
        let expanded = ctx.sidebar.expansion().is_expanded(&scope, &item.id);

        let mut row = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(item.label.as_str()).size(typography::BODY).width(Length::Fill));
        if item.has_children() {
            let chevron = if expanded {
                icons::chevron_down()
            } else {
                icons::chevron_right()
            };
            row = row.push(icons::themed(chevron, sizing::ICON_SM));
        }

        column = column.push(
            button(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::menu_item(false))
                .on_press(Message::SubMenuPressed {
                    scope: scope.clone(),
                    id: item.id.clone(),
                }),
        );

        if expanded && item.has_children() {
            let mut nested = scope.clone();
            nested.push(item.id.clone());
            column = column.push(
                Container::new(sub_menu(ctx, &item.children, nested))
                    .padding(Padding {
                        left: spacing::MD,
                        ..Padding::ZERO
                    }),
            );
        }
    }

    column.into()
}

fn footer<'a>(label: &'a str) -> Element<'a, Message> {
    Column::new()
        .push(divider())
        .push(
            Container::new(Text::new(label).size(typography::CAPTION))
                .width(Length::Fill)
                .padding(spacing::MD),
        )
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider)
        .into()
}
