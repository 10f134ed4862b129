// SPDX-License-Identifier: MPL-2.0
//! Gallery application showcasing the toast, sidebar and input components.
//!
//! The `App` struct wires the components together the way a host
//! application would: toasts are published through a shared [`Channel`] and
//! collected by a [`ToastContainer`], a standalone toast is driven through
//! its controlled visibility flag, the sidebar reports selections back as
//! toasts, and the form fields demonstrate controlled and uncontrolled use.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ToastConfig};
use crate::i18n::fluent::I18n;
use crate::ui::input::{self, Input};
use crate::ui::notifications::{
    self, Channel, Container as ToastContainer, DismissReason, Kind, Lifecycle, Position, Toast,
};
use crate::ui::sidebar::{self, MenuItem, Sidebar, SubMenuItem};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// A form field description together with the state it owns.
#[derive(Debug, Clone)]
pub struct Field {
    pub input: Input,
    pub state: input::State,
}

impl Field {
    fn new(input: Input) -> Self {
        Self {
            input,
            state: input::State::default(),
        }
    }
}

/// A toast rendered outside the container, shown and hidden by the parent.
#[derive(Debug, Clone)]
pub struct Standalone {
    pub toast: Toast,
    pub lifecycle: Lifecycle,
}

/// Root Iced application state for the gallery.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    toast_defaults: ToastConfig,
    channel: Channel,
    toasts: ToastContainer,
    standalone: Standalone,
    sidebar: Sidebar,
    name: Field,
    password: Field,
    email: Field,
    /// Number of completion callbacks run so far.
    closed_count: Rc<Cell<u32>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("queued", &self.toasts.queued_count())
            .field("sidebar_open", &self.sidebar.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::from_config(&config, config_warning, flags.lang);
        (app, Task::none())
    }

    /// Builds the gallery from an already loaded configuration.
    ///
    /// `config_warning` is an i18n key published as a warning toast.
    pub fn from_config(config: &Config, config_warning: Option<String>, lang: Option<String>) -> Self {
        let i18n = I18n::new(lang, config);
        let now = Instant::now();

        let channel = Channel::new();
        let mut toasts = ToastContainer::new().with_max_visible(config.toast.max_visible());
        toasts.attach(&channel);

        let closed_count = Rc::new(Cell::new(0));

        let standalone_toast = Toast::success(i18n.tr("gallery-standalone-message"))
            .with_title(i18n.tr("gallery-standalone-title"))
            .with_position(Position::TopCenter)
            .with_duration(config.toast.duration())
            .with_on_close(counter(&closed_count));
        let mut lifecycle = Lifecycle::new(
            standalone_toast.duration(),
            standalone_toast.callback(),
            now,
        );
        lifecycle.cancel();

        let sidebar = build_sidebar(&i18n, config.sidebar.width()).unwrap_or_else(|err| {
            log::warn!("Failed to build gallery menu: {err}");
            Sidebar::default()
        });

        let mut app = Self {
            theme_mode: config.general.theme_mode,
            toast_defaults: config.toast.clone(),
            channel,
            toasts,
            standalone: Standalone {
                toast: standalone_toast,
                lifecycle,
            },
            sidebar,
            name: Field::new(
                Input::new(input::Kind::Text)
                    .with_label(i18n.tr("gallery-name-label"))
                    .with_placeholder(i18n.tr("gallery-name-placeholder"))
                    .with_helper_text(i18n.tr("gallery-name-helper"))
                    .with_required(true)
                    .with_clearable(true),
            ),
            password: Field::new(
                Input::new(input::Kind::Password)
                    .with_label(i18n.tr("gallery-password-label"))
                    .with_placeholder(i18n.tr("gallery-password-placeholder"))
                    .with_helper_text(i18n.tr("gallery-password-helper"))
                    .with_required(true),
            ),
            email: Field::new(
                Input::new(input::Kind::Email)
                    .with_label(i18n.tr("gallery-email-label"))
                    .with_placeholder(i18n.tr("gallery-email-placeholder"))
                    .with_helper_text(i18n.tr("gallery-email-helper"))
                    .with_value("")
                    .with_clearable(true),
            ),
            closed_count,
            i18n,
        };

        if let Some(key) = config_warning {
            app.channel
                .publish(Toast::warning(app.i18n.tr(&key)).with_duration(Duration::ZERO));
            app.toasts.receive(now);
        }

        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.has_armed_timers(),
            self.toast_defaults.tick_interval(),
        )
    }

    /// Whether any toast timer still needs ticks.
    #[must_use]
    pub fn has_armed_timers(&self) -> bool {
        self.toasts.has_pending_timers() || self.standalone.lifecycle.deadline().is_some()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::Toast(toast_message) => self.toasts.update(&toast_message, now),
            Message::Tick(instant) => {
                self.toasts
                    .update(&notifications::Message::Tick(instant), instant);
                self.standalone.lifecycle.poll(instant);
            }
            Message::Publish(kind) => self.publish_sample(kind),
            Message::ShowStandalone => {
                self.standalone.lifecycle.set_visible(true, now);
            }
            Message::HideStandalone => {
                self.standalone.lifecycle.set_visible(false, now);
            }
            Message::StandaloneClosed => {
                self.standalone.lifecycle.dismiss(DismissReason::Closed);
            }
            Message::Sidebar(sidebar_message) => self.handle_sidebar(sidebar_message),
            Message::NameInput(input_message) => {
                input::update(&mut self.name.state, &self.name.input, input_message);
            }
            Message::PasswordInput(input_message) => {
                input::update(&mut self.password.state, &self.password.input, input_message);
            }
            Message::EmailInput(input_message) => self.handle_email(input_message),
        }

        self.toasts.receive(now);
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
            standalone: &self.standalone,
            sidebar: &self.sidebar,
            name: &self.name,
            password: &self.password,
            email: &self.email,
            closed_count: self.closed_count.get(),
        })
    }

    fn publish_sample(&mut self, kind: Kind) {
        let key = kind_key(kind);
        let duration = if kind == Kind::Error {
            // Errors stay until closed.
            Duration::ZERO
        } else {
            self.toast_defaults.duration()
        };

        let toast = Toast::new(self.i18n.tr(&format!("gallery-toast-{key}-message")))
            .with_kind(kind)
            .with_title(self.i18n.tr(&format!("gallery-toast-{key}-title")))
            .with_position(self.toast_defaults.position)
            .with_duration(duration)
            .with_on_close(counter(&self.closed_count));
        self.channel.publish(toast);
    }

    fn handle_sidebar(&mut self, message: sidebar::Message) {
        match self.sidebar.update(message) {
            Ok(sidebar::Event::None) => {}
            Ok(sidebar::Event::OpenChanged(open)) => {
                log::debug!("sidebar {}", if open { "opened" } else { "closed" });
            }
            Ok(sidebar::Event::ItemSelected(id)) => {
                let label = self.i18n.tr(&format!("gallery-menu-{id}"));
                let text = self
                    .i18n
                    .tr_with_args("gallery-item-selected", &[("item", label.as_str())]);
                self.channel.publish(
                    Toast::info(text)
                        .with_position(self.toast_defaults.position)
                        .with_duration(self.toast_defaults.duration()),
                );
            }
            Err(err) => log::warn!("Sidebar message rejected: {err}"),
        }
    }

    fn handle_email(&mut self, message: input::Message) {
        match input::update(&mut self.email.state, &self.email.input, message) {
            input::Event::None => {}
            input::Event::Changed(value) => {
                self.email.input.value = Some(value);
                self.email.input.error = false;
                self.email.input.error_message = None;
            }
            input::Event::Submitted(value) => {
                if is_valid_email(&value) {
                    let text = self
                        .i18n
                        .tr_with_args("gallery-email-saved", &[("email", value.as_str())]);
                    self.channel.publish(
                        Toast::success(text)
                            .with_position(self.toast_defaults.position)
                            .with_duration(self.toast_defaults.duration()),
                    );
                } else {
                    self.email.input.error = true;
                    self.email.input.error_message = Some(self.i18n.tr("gallery-email-invalid"));
                }
            }
        }
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastContainer {
        &self.toasts
    }

    #[must_use]
    pub fn standalone(&self) -> &Standalone {
        &self.standalone
    }

    #[must_use]
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    #[must_use]
    pub fn email(&self) -> &Field {
        &self.email
    }

    #[must_use]
    pub fn closed_count(&self) -> u32 {
        self.closed_count.get()
    }
}

fn counter(count: &Rc<Cell<u32>>) -> impl Fn() + 'static {
    let count = Rc::clone(count);
    move || count.set(count.get() + 1)
}

fn kind_key(kind: Kind) -> &'static str {
    match kind {
        Kind::Info => "info",
        Kind::Success => "success",
        Kind::Warning => "warning",
        Kind::Error => "error",
    }
}

fn build_sidebar(i18n: &I18n, width: f32) -> crate::error::Result<Sidebar> {
    let label = |id: &str| i18n.tr(&format!("gallery-menu-{id}"));
    let entry = |id: &str| SubMenuItem::new(id, label(id));

    Ok(Sidebar::new(
        vec![
            MenuItem::new("home", label("home")).with_active(true),
            MenuItem::new("profile", label("profile")),
        ],
        vec![
            entry("settings").with_children(vec![
                entry("account").with_children(vec![entry("billing"), entry("security")]),
                entry("privacy"),
            ]),
            entry("help").with_children(vec![entry("faq"), entry("contact")]),
            entry("logout"),
        ],
    )?
    .with_width(width)
    .with_title(i18n.tr("gallery-sidebar-title"))
    .with_footer(i18n.tr("gallery-sidebar-footer")))
}

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::from_config(&Config::default(), None, Some("en-US".to_string()))
    }

    #[test]
    fn gallery_starts_quiet() {
        let app = app();
        assert!(app.toasts().is_empty());
        assert!(!app.standalone().lifecycle.is_visible());
        assert!(!app.sidebar().is_open());
        assert!(!app.has_armed_timers());
        assert_eq!(app.title(), "Component Gallery");
    }

    #[test]
    fn config_warning_is_published_as_sticky_toast() {
        let app = App::from_config(
            &Config::default(),
            Some(config::CONFIG_LOAD_WARNING_KEY.to_string()),
            Some("en-US".to_string()),
        );
        let item = app.toasts().active().next().unwrap();
        assert_eq!(item.toast().kind(), Kind::Warning);
        assert!(!item.toast().auto_dismisses());
    }

    #[test]
    fn publish_reaches_container() {
        let mut app = app();
        let _ = app.update(Message::Publish(Kind::Success));
        let _ = app.update(Message::Publish(Kind::Error));

        assert_eq!(app.toasts().len(), 2);
        assert!(app.has_armed_timers());
        let kinds: Vec<Kind> = app.toasts().active().map(|t| t.toast().kind()).collect();
        assert_eq!(kinds, vec![Kind::Success, Kind::Error]);
    }

    #[test]
    fn closing_a_toast_runs_its_callback() {
        let mut app = app();
        let _ = app.update(Message::Publish(Kind::Info));
        let id = app.toasts().active().next().unwrap().id();

        let _ = app.update(Message::Toast(notifications::Message::Dismiss(id)));
        assert!(app.toasts().is_empty());
        assert_eq!(app.closed_count(), 1);
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = app();
        let _ = app.update(Message::Publish(Kind::Info));
        let later = Instant::now() + Duration::from_secs(60);

        let _ = app.update(Message::Tick(later));
        assert!(app.toasts().is_empty());
        assert_eq!(app.closed_count(), 1);
    }

    #[test]
    fn standalone_show_hide_cycle() {
        let mut app = app();
        let _ = app.update(Message::ShowStandalone);
        assert!(app.standalone().lifecycle.is_visible());
        assert!(app.has_armed_timers());

        let _ = app.update(Message::HideStandalone);
        assert!(!app.standalone().lifecycle.is_visible());
        assert_eq!(app.closed_count(), 1);

        let _ = app.update(Message::ShowStandalone);
        let _ = app.update(Message::StandaloneClosed);
        assert_eq!(app.closed_count(), 2);
    }

    #[test]
    fn sidebar_selection_publishes_toast() {
        let mut app = app();
        let _ = app.update(Message::Sidebar(sidebar::Message::Open));
        let _ = app.update(Message::Sidebar(sidebar::Message::SubMenuPressed {
            scope: vec!["settings".to_string(), "account".to_string()],
            id: "billing".to_string(),
        }));

        let item = app.toasts().active().next().unwrap();
        assert_eq!(item.toast().message(), "Selected: Billing");
    }

    #[test]
    fn unknown_sidebar_entry_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Sidebar(sidebar::Message::ItemPressed(
            "missing".to_string(),
        )));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn invalid_email_flags_field() {
        let mut app = app();
        let _ = app.update(Message::EmailInput(input::Message::Changed("nope".into())));
        let _ = app.update(Message::EmailInput(input::Message::Submit));

        assert!(app.email().input.error);
        assert!(app.toasts().is_empty());

        let _ = app.update(Message::EmailInput(input::Message::Changed(
            "ada@example.com".into(),
        )));
        assert!(!app.email().input.error);
        let _ = app.update(Message::EmailInput(input::Message::Submit));
        assert_eq!(app.toasts().len(), 1);
    }

    #[test]
    fn email_validation() {
        for valid in ["a@b.co", "first.last@example.org"] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in ["", "plain", "@example.com", "a@b", "a@.com", "a@b.", "a b@c.d", "a@b@c.d"] {
            assert!(!is_valid_email(invalid), "{invalid}");
        }
    }

    #[test]
    fn view_renders_with_everything_open() {
        let mut app = app();
        let _ = app.update(Message::Publish(Kind::Warning));
        let _ = app.update(Message::ShowStandalone);
        let _ = app.update(Message::Sidebar(sidebar::Message::Open));
        let _element = app.view();
    }
}
