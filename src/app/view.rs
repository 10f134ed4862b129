// SPDX-License-Identifier: MPL-2.0
//! Gallery layout: component sections with overlays stacked on top.

use super::{Field, Message, Standalone};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::input;
use crate::ui::notifications::{self, Container as ToastContainer, Kind};
use crate::ui::sidebar::{self, Sidebar};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Font, Weight};
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a ToastContainer,
    pub standalone: &'a Standalone,
    pub sidebar: &'a Sidebar,
    pub name: &'a Field,
    pub password: &'a Field,
    pub email: &'a Field,
    pub closed_count: u32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header(&ctx))
        .push(toast_section(&ctx))
        .push(input_section(&ctx));

    let base = scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(notifications::overlay(ctx.toasts, ctx.i18n).map(Message::Toast));

    if ctx.standalone.lifecycle.is_visible() {
        let position = ctx.standalone.toast.position();
        layers = layers.push(
            Container::new(notifications::card(
                &ctx.standalone.toast,
                ctx.i18n,
                Some(Message::StandaloneClosed),
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(position.horizontal())
            .align_y(position.vertical())
            .padding(spacing::MD),
        );
    }

    layers
        .push(
            sidebar::view(sidebar::ViewContext {
                i18n: ctx.i18n,
                sidebar: ctx.sidebar,
            })
            .map(Message::Sidebar),
        )
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("gallery-welcome-title"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Text::new(ctx.i18n.tr("gallery-welcome-subtitle")).size(typography::BODY));

    let menu = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::themed(icons::menu(), sizing::ICON_MD))
            .push(Text::new(ctx.i18n.tr("gallery-menu-button")).size(typography::BODY)),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::secondary)
    .on_press(Message::Sidebar(sidebar::Message::Toggle));

    Row::new()
        .align_y(Vertical::Center)
        .push(Container::new(titles).width(Length::Fill))
        .push(menu)
        .into()
}

fn toast_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let publish = Kind::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, kind| {
            let key = super::kind_key(*kind);
            row.push(
                button(
                    Row::new()
                        .spacing(spacing::XXS)
                        .align_y(Vertical::Center)
                        .push(icons::tinted(kind.icon(), sizing::ICON_SM, kind.colors().accent))
                        .push(Text::new(ctx.i18n.tr(&format!("gallery-publish-{key}")))),
                )
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::secondary)
                .on_press(Message::Publish(*kind)),
            )
        },
    );

    let standalone_visible = ctx.standalone.lifecycle.is_visible();
    let standalone = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr("gallery-standalone-show")))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::primary)
                .on_press_maybe((!standalone_visible).then_some(Message::ShowStandalone)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("gallery-standalone-hide")))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::secondary)
                .on_press_maybe(standalone_visible.then_some(Message::HideStandalone)),
        );

    let count = ctx.closed_count.to_string();
    let closed = Text::new(
        ctx.i18n
            .tr_with_args("gallery-closed-count", &[("count", count.as_str())]),
    )
    .size(typography::CAPTION);

    section(
        ctx.i18n.tr("gallery-section-toasts"),
        Column::new()
            .spacing(spacing::SM)
            .push(publish)
            .push(standalone)
            .push(closed)
            .into(),
    )
}

fn input_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let field = |entry: &'a Field| {
        input::view(input::ViewContext {
            i18n: ctx.i18n,
            input: &entry.input,
            state: &entry.state,
        })
    };

    section(
        ctx.i18n.tr("gallery-section-inputs"),
        Column::new()
            .spacing(spacing::MD)
            .push(field(ctx.name).map(Message::NameInput))
            .push(field(ctx.password).map(Message::PasswordInput))
            .push(field(ctx.email).map(Message::EmailInput))
            .into(),
    )
}

fn section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(title).size(typography::TITLE_SM).font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                }),
            )
            .push(content),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::section)
    .into()
}
