// SPDX-License-Identifier: MPL-2.0
//! Demo application: a simulated device with two screens, and a form that
//! drives every banner parameter.
//!
//! The `App` struct owns the screen hierarchy, the notification manager and
//! the persisted configuration. Layout defaults changed in the form are
//! applied to the manager and written back to `settings.toml`.

mod form;
mod message;
mod sample_content;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::feedback::SystemFeedback;
use crate::host::{HostBounds, HostId, ScreenStack};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Point, Rectangle, Size, Subscription, Task, Theme};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

pub const DEVICE_WIDTH: f32 = 390.0;
pub const DEVICE_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = DEVICE_WIDTH + sizing::FORM_WIDTH + 64.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = DEVICE_HEIGHT + 48.0;

/// Completion log entries kept for display.
const LOG_CAPACITY: usize = 12;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    screens: ScreenStack,
    inbox: HostId,
    settings: HostId,
    notifications: notifications::Manager,
    form: form::State,
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    log: CompletionLog,
    shown: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.count())
            .finish_non_exhaustive()
    }
}

/// Completion callbacks write here; the view reads it.
#[derive(Debug, Clone, Default)]
pub struct CompletionLog(Rc<RefCell<VecDeque<String>>>);

impl CompletionLog {
    /// Returns a completion callback recording `label` and the tap flag.
    pub fn callback(&self, label: String) -> impl FnOnce(bool) + 'static {
        let entries = Rc::clone(&self.0);
        move |was_tapped| {
            let mut entries = entries.borrow_mut();
            if entries.len() == LOG_CAPACITY {
                entries.pop_back();
            }
            entries.push_front(format!("{label}: was_tapped = {was_tapped}"));
        }
    }

    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Bounds of the simulated device, shared by the root window and both
/// screens. Screens keep their content below the navigation bar and above
/// the tab bar.
fn device_bounds() -> (HostBounds, HostBounds) {
    let frame = Rectangle::new(Point::ORIGIN, Size::new(DEVICE_WIDTH, DEVICE_HEIGHT));
    let root = HostBounds::new(frame).with_status_bar(sizing::STATUS_BAR_HEIGHT);
    let screen = root.with_safe_area(
        sizing::STATUS_BAR_HEIGHT + sizing::NAV_BAR_HEIGHT,
        sizing::TAB_BAR_HEIGHT,
    );
    (root, screen)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot function; flags are consumed on the first call.
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

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), None, notifications::Manager::new())
    }
}

impl App {
    fn with_config(
        config: Config,
        config_dir: Option<PathBuf>,
        notifications: notifications::Manager,
    ) -> Self {
        let (root_bounds, screen_bounds) = device_bounds();
        let mut screens = ScreenStack::new(root_bounds);
        let settings = screens.push(screen_bounds);
        let inbox = screens.push(screen_bounds);

        let mut notifications = notifications.with_layout(config.layout_defaults());
        notifications.set_default_delay(config.default_delay());
        notifications.set_message_max_length(config.message_max_length());

        Self {
            screen: Screen::Inbox,
            screens,
            inbox,
            settings,
            notifications,
            form: form::State::from_config(&config),
            config,
            config_dir,
            theme_mode: ThemeMode::default(),
            log: CompletionLog::default(),
            shown: 0,
        }
    }

    /// Loads the configuration and wires the system sound/vibration output.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "settings.toml ignored");
        }

        let feedback = SystemFeedback::new(config.sound_dir());
        let manager = notifications::Manager::with_feedback(feedback);
        let app = Self::with_config(config, flags.config_dir, manager);
        tracing::info!(
            minimum_height = app.notifications.layout().minimum_height(),
            delay_ms = app.notifications.default_delay().as_millis(),
            "demo started"
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} - iced_banner", self.screen.title())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            screens: &mut self.screens,
            inbox: self.inbox,
            settings: self.settings,
            notifications: &mut self.notifications,
            form: &mut self.form,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            theme_mode: &mut self.theme_mode,
            log: &self.log,
            shown: &mut self.shown,
        };

        match message {
            Message::SwitchScreen(screen) => update::handle_switch_screen(&mut ctx, screen),
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
            }
            Message::Show => update::handle_show(&mut ctx, false),
            Message::ShowCustom => update::handle_show(&mut ctx, true),
            Message::HideLast => update::handle_hide(&mut ctx, false),
            Message::HideAll => update::handle_hide(&mut ctx, true),
            Message::ClearLog => ctx.log.clear(),
            Message::Tick(now) => ctx.notifications.tick(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            screens: &self.screens,
            notifications: &self.notifications,
            form: &self.form,
            theme_mode: self.theme_mode,
            log: self.log.entries(),
            now: Instant::now(),
        })
    }
}
