// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use super::form;
use super::Screen;
use crate::ui::notifications::NotificationMessage;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Form(form::Message),
    Notification(NotificationMessage),
    /// Show a text banner built from the form.
    Show,
    /// Show a banner with custom content.
    ShowCustom,
    HideLast,
    HideAll,
    ClearLog,
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BANNER_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
