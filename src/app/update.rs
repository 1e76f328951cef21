// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo.

use super::form::{self, ContextChoice, Event as FormEvent};
use super::sample_content::TitledContent;
use super::{CompletionLog, Screen};
use crate::config::{self, Config};
use crate::host::{HostContext, HostId, ScreenHierarchy, ScreenStack};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub screens: &'a mut ScreenStack,
    pub inbox: HostId,
    pub settings: HostId,
    pub notifications: &'a mut notifications::Manager,
    pub form: &'a mut form::State,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub theme_mode: &'a mut ThemeMode,
    pub log: &'a CompletionLog,
    pub shown: &'a mut usize,
}

impl UpdateContext<'_> {
    fn host_of(&self, screen: Screen) -> HostId {
        match screen {
            Screen::Inbox => self.inbox,
            Screen::Settings => self.settings,
        }
    }

    fn context(&self) -> HostContext {
        match self.form.context {
            ContextChoice::TopMost => HostContext::TopMost,
            ContextChoice::Inbox => HostContext::Screen(self.inbox),
            ContextChoice::Settings => HostContext::Screen(self.settings),
            ContextChoice::BelowStatusBar => HostContext::BelowStatusBar,
            ContextChoice::AboveStatusBar => HostContext::AboveStatusBar,
        }
    }

    fn persist(&self) {
        if let Err(err) = config::save_with_override(&*self.config, self.config_dir.cloned()) {
            tracing::warn!(error = %err, "failed to save settings");
        }
    }
}

pub fn handle_switch_screen(ctx: &mut UpdateContext<'_>, screen: Screen) {
    let host = ctx.host_of(screen);
    if ctx.screens.bring_to_front(host) {
        *ctx.screen = screen;
        tracing::debug!(screen = screen.title(), host = %host, "switched screen");
    }
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) {
    match form::update(ctx.form, message) {
        FormEvent::None => {}
        FormEvent::LayoutChanged => {
            let layout = ctx.form.layout(ctx.notifications.layout());
            ctx.notifications
                .register_minimum_height(layout.minimum_height());
            ctx.notifications
                .register_content_margin_height(layout.content_margin_height());
            ctx.config.set_layout_defaults(ctx.notifications.layout());
            ctx.persist();
        }
        FormEvent::DelayChanged(delay) => {
            ctx.notifications.set_default_delay(delay);
            ctx.config.notification.default_delay_ms = u64::try_from(delay.as_millis()).ok();
            ctx.persist();
        }
        FormEvent::MessageMaxLengthChanged(length) => {
            ctx.notifications.set_message_max_length(length);
            ctx.config.notification.message_max_length = Some(length);
            ctx.persist();
        }
        FormEvent::ThemeChanged(mode) => *ctx.theme_mode = mode,
    }
}

pub fn handle_show(ctx: &mut UpdateContext<'_>, custom: bool) {
    *ctx.shown += 1;
    let label = format!("#{}", ctx.shown);

    let base = ctx.notifications.create(ctx.context());
    let notification: Notification = if custom {
        base.with_custom_content(TitledContent::new(
            "New follower",
            format!("Banner {label} with custom content"),
        ))
    } else {
        base.with_message(ctx.form.sample.text())
    };
    let notification = ctx
        .form
        .configure(notification)
        .on_complete(ctx.log.callback(label.clone()));

    match ctx.notifications.show(&*ctx.screens, notification, Instant::now()) {
        Ok(id) => tracing::info!(%label, id = %id, "banner shown"),
        Err(err) => tracing::warn!(%label, error = %err, "banner not shown"),
    }
}

pub fn handle_hide(ctx: &mut UpdateContext<'_>, all: bool) {
    let now = Instant::now();
    let choice = ctx.form.context;

    if choice.is_status_bar() {
        let Some(root) = ctx.screens.root() else {
            return;
        };
        if all {
            ctx.notifications.hide_all_on(root, now);
        } else {
            ctx.notifications.hide_last_on(root, now);
        }
        return;
    }

    let host = match choice {
        ContextChoice::Inbox => ctx.inbox,
        ContextChoice::Settings => ctx.settings,
        _ => ctx.host_of(*ctx.screen),
    };
    if all {
        let count = ctx.notifications.hide_all_for(&*ctx.screens, host, now);
        tracing::info!(host = %host, count, "hide all");
    } else {
        let hidden = ctx.notifications.hide_last_for(&*ctx.screens, host, now);
        tracing::info!(host = %host, hidden, "hide last");
    }
}
