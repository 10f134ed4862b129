// SPDX-License-Identifier: MPL-2.0
//! Text field with label, password toggle, clear button and validation text.
//!
//! An [`Input`] describes the field (the parent's props); its [`State`]
//! holds what the field owns itself. When `Input::value` is `Some` the field
//! is *controlled*: it displays that value and only reports edits through
//! [`Event::Changed`], leaving the parent to store them. Otherwise the field
//! keeps its own value in `State`.

pub mod error_message;
pub mod label;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, text_input, tooltip, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Padding, Theme};

/// Kind of value the field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Text,
    Password,
    Number,
    Email,
    Tel,
}

/// Field description supplied by the parent.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub kind: Kind,
    pub label: Option<String>,
    pub required: bool,
    pub placeholder: String,
    /// `Some` makes the field controlled.
    pub value: Option<String>,
    pub clearable: bool,
    pub error: bool,
    pub error_message: Option<String>,
    pub helper_text: Option<String>,
    pub disabled: bool,
}

impl Input {
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Makes the field controlled, starting from `value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    /// Value currently displayed by the field.
    #[must_use]
    pub fn displayed<'a>(&'a self, state: &'a State) -> &'a str {
        self.value.as_deref().unwrap_or(&state.value)
    }
}

/// State owned by the field itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Value of an uncontrolled field. Unused while controlled.
    pub value: String,
    pub show_password: bool,
}

/// Messages emitted by the field widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Changed(String),
    ToggleVisibility,
    Clear,
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The value was edited or cleared.
    Changed(String),
    /// Enter was pressed with this value.
    Submitted(String),
}

/// Process a field message and return the corresponding event.
pub fn update(state: &mut State, input: &Input, message: Message) -> Event {
    if input.disabled {
        return Event::None;
    }

    match message {
        Message::Changed(value) => {
            if input.kind == Kind::Number && !is_partial_number(&value) {
                return Event::None;
            }
            set_value(state, input, value)
        }
        Message::ToggleVisibility => {
            state.show_password = !state.show_password;
            Event::None
        }
        Message::Clear => set_value(state, input, String::new()),
        Message::Submit => Event::Submitted(input.displayed(state).to_string()),
    }
}

fn set_value(state: &mut State, input: &Input, value: String) -> Event {
    if !input.is_controlled() {
        state.value.clone_from(&value);
    }
    Event::Changed(value)
}

/// Whether `value` can become a number with more typing (`""`, `"-"`, `"1."`).
#[must_use]
pub fn is_partial_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut seen_dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Contextual data needed to render a field.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub input: &'a Input,
    pub state: &'a State,
}

/// Render the field.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = ctx.input;
    let value = input.displayed(ctx.state);
    let has_value = !value.is_empty();
    let is_password = input.kind == Kind::Password;

    let mut field = text_input(&input.placeholder, value)
        .secure(is_password && !ctx.state.show_password)
        .size(typography::BODY)
        .padding(Padding {
            top: spacing::XS,
            bottom: spacing::XS,
            left: spacing::SM,
            right: if input.clearable || is_password {
                spacing::XL + spacing::LG
            } else {
                spacing::SM
            },
        })
        .width(Length::Fill)
        .style(styles::input::field(input.error));
    if !input.disabled {
        field = field.on_input(Message::Changed).on_submit(Message::Submit);
    }

    let mut actions = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    if is_password && has_value {
        let (icon, tip) = if ctx.state.show_password {
            (icons::eye_off(), ctx.i18n.tr("input-hide-password"))
        } else {
            (icons::eye(), ctx.i18n.tr("input-show-password"))
        };
        actions = actions.push(action_button(icon, tip, Message::ToggleVisibility, input.disabled));
    }
    if input.clearable && has_value {
        actions = actions.push(action_button(
            icons::x(),
            ctx.i18n.tr("input-clear-tooltip"),
            Message::Clear,
            input.disabled,
        ));
    }

    let field = Stack::new().push(field).push(
        Container::new(actions)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .padding(Padding {
                right: spacing::XS,
                ..Padding::ZERO
            }),
    );

    let mut column = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(caption) = &input.label {
        column = column.push(label::view(caption, input.required));
    }
    column = column.push(field);

    if input.error {
        if let Some(message) = &input.error_message {
            column = column.push(error_message::view(message));
        }
    } else if let Some(helper) = &input.helper_text {
        column = column.push(
            Text::new(helper.as_str())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    column.into()
}

fn action_button<'a>(
    icon: iced::widget::Svg<'a>,
    tip: String,
    message: Message,
    disabled: bool,
) -> Element<'a, Message> {
    let control = button(icons::themed(icon, sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::ghost(palette::GRAY_400))
        .on_press_maybe((!disabled).then_some(message));

    styles::tooltip::styled(control, tip, tooltip::Position::Top).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_field_stores_edits() {
        let input = Input::new(Kind::Text);
        let mut state = State::default();

        let event = update(&mut state, &input, Message::Changed("Ada".into()));
        assert_eq!(event, Event::Changed("Ada".into()));
        assert_eq!(input.displayed(&state), "Ada");
    }

    #[test]
    fn controlled_field_only_reports_edits() {
        let input = Input::new(Kind::Email).with_value("a@b.c");
        let mut state = State::default();

        let event = update(&mut state, &input, Message::Changed("x".into()));
        assert_eq!(event, Event::Changed("x".into()));
        assert!(state.value.is_empty());
        assert_eq!(input.displayed(&state), "a@b.c");
    }

    #[test]
    fn clear_reports_empty_value() {
        let input = Input::new(Kind::Text).with_clearable(true);
        let mut state = State {
            value: "something".into(),
            ..State::default()
        };

        assert_eq!(update(&mut state, &input, Message::Clear), Event::Changed(String::new()));
        assert!(state.value.is_empty());
    }

    #[test]
    fn visibility_toggle_flips_state() {
        let input = Input::new(Kind::Password);
        let mut state = State::default();

        update(&mut state, &input, Message::ToggleVisibility);
        assert!(state.show_password);
        update(&mut state, &input, Message::ToggleVisibility);
        assert!(!state.show_password);
    }

    #[test]
    fn number_field_rejects_non_numeric_edits() {
        let input = Input::new(Kind::Number);
        let mut state = State::default();

        assert_eq!(
            update(&mut state, &input, Message::Changed("-12.5".into())),
            Event::Changed("-12.5".into())
        );
        assert_eq!(update(&mut state, &input, Message::Changed("12a".into())), Event::None);
        assert_eq!(state.value, "-12.5");
    }

    #[test]
    fn partial_numbers_are_accepted() {
        for value in ["", "-", "0", "1.", "-3.25", ".5"] {
            assert!(is_partial_number(value), "{value}");
        }
        for value in ["1.2.3", "--1", "1-", "abc", "1e5"] {
            assert!(!is_partial_number(value), "{value}");
        }
    }

    #[test]
    fn disabled_field_ignores_messages() {
        let input = Input::new(Kind::Text).with_disabled(true);
        let mut state = State::default();

        assert_eq!(update(&mut state, &input, Message::Changed("x".into())), Event::None);
        assert!(state.value.is_empty());
    }

    #[test]
    fn submit_reports_displayed_value() {
        let input = Input::new(Kind::Email).with_value("me@example.com");
        let mut state = State::default();
        assert_eq!(
            update(&mut state, &input, Message::Submit),
            Event::Submitted("me@example.com".into())
        );
    }

    #[test]
    fn view_renders_every_variant() {
        let i18n = I18n::default();
        let filled = State {
            value: "secret".into(),
            show_password: false,
        };
        let inputs = [
            Input::new(Kind::Text).with_label("Name").with_required(true),
            Input::new(Kind::Password).with_clearable(true),
            Input::new(Kind::Email)
                .with_value("bad")
                .with_error(true)
                .with_error_message("Invalid"),
            Input::new(Kind::Tel).with_helper_text("Optional").with_disabled(true),
        ];

        for input in &inputs {
            let _element = view(ViewContext {
                i18n: &i18n,
                input,
                state: &filled,
            });
        }
    }
}
