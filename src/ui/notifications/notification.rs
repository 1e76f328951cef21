// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] carries its display configuration and its place in
//! the presentation lifecycle:
//!
//! ```text
//! Unattached -> Presenting -> Visible -> Dismissing -> Detached
//! ```
//!
//! Configuration can change freely until it is used: the message is
//! truncated when rendered, and sound/vibration are read when the entrance
//! animation ends. Transitions are driven by the
//! [`Manager`](super::Manager).

use super::content::{truncate, CustomContent, TextLabel};
use super::icon::{Anchor, BannerIcon};
use super::layout::LayoutDefaults;
use super::style::{BannerColor, ContentColor, Gradient};
use crate::config::{
    DEFAULT_DELAY, DEFAULT_LABEL_FONT_SIZE, DEFAULT_MESSAGE_MAX_LENGTH, DISMISS_ANIMATION,
    PRESENT_ANIMATION,
};
use crate::feedback::Sound;
use crate::host::{HostContext, ResolvedHost};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge of the host a banner is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Position::Top => "Top",
            Position::Bottom => "Bottom",
        })
    }
}

/// Callback receiving whether the banner was tapped.
pub type CompletionFn = Box<dyn FnOnce(bool)>;

/// Completion callback that can run at most once.
#[derive(Default)]
pub struct Completion(Option<CompletionFn>);

impl Completion {
    pub fn new(callback: impl FnOnce(bool) + 'static) -> Self {
        Self(Some(Box::new(callback)))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Runs the callback. Returns `false` when it already ran or was never set.
    pub fn fire(&mut self, was_tapped: bool) -> bool {
        match self.0.take() {
            Some(callback) => {
                callback(was_tapped);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_pending() {
            "Completion(pending)"
        } else {
            "Completion(none)"
        })
    }
}

/// Pending auto-dismissal. Dropping or replacing it cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    #[must_use]
    pub fn schedule(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn has_fired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unattached,
    Presenting,
    Visible,
    Dismissing,
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Unattached,
    Presenting { started: Instant },
    Visible,
    Dismissing { started: Instant },
    Detached,
}

/// A banner notification.
pub struct Notification {
    id: NotificationId,
    context: HostContext,
    layout: LayoutDefaults,

    message: Option<String>,
    custom_content: Option<Box<dyn CustomContent>>,
    label_font_size: f32,
    message_max_length: usize,

    icon: BannerIcon,
    custom_icon: Option<PathBuf>,
    anchor: Anchor,
    position: Position,
    color: BannerColor,
    custom_top_color: Option<Color>,
    custom_bottom_color: Option<Color>,
    asset_color: ContentColor,
    text_color: ContentColor,
    manual_asset_color: Option<Color>,
    manual_text_color: Option<Color>,

    sound: Option<String>,
    vibrate: bool,
    delay: Duration,
    dismiss_on_tap: bool,
    completion: Completion,

    phase: Phase,
    host: Option<ResolvedHost>,
    height: f32,
    timer: Option<DismissTimer>,
    tapped: bool,
    loaded_sound: Option<Sound>,
}

impl std::fmt::Debug for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("context", &self.context)
            .field("message", &self.message)
            .field("custom_content", &self.custom_content.is_some())
            .field("position", &self.position)
            .field("color", &self.color)
            .field("delay", &self.delay)
            .field("state", &self.state())
            .field("host", &self.host)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Notification {
    /// Creates an empty notification for the given context.
    ///
    /// The layout defaults are captured now; later changes to the shared
    /// defaults do not affect this notification.
    #[must_use]
    pub fn new(context: HostContext, layout: LayoutDefaults) -> Self {
        Self {
            id: NotificationId::new(),
            context,
            layout,
            message: None,
            custom_content: None,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            message_max_length: DEFAULT_MESSAGE_MAX_LENGTH,
            icon: BannerIcon::default(),
            custom_icon: None,
            anchor: Anchor::default(),
            position: Position::default(),
            color: BannerColor::default(),
            custom_top_color: None,
            custom_bottom_color: None,
            asset_color: ContentColor::default(),
            text_color: ContentColor::default(),
            manual_asset_color: None,
            manual_text_color: None,
            sound: None,
            vibrate: false,
            delay: DEFAULT_DELAY,
            dismiss_on_tap: true,
            completion: Completion::default(),
            phase: Phase::Unattached,
            host: None,
            height: 0.0,
            timer: None,
            tapped: false,
            loaded_sound: None,
        }
    }

    // ------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the text label with custom content.
    #[must_use]
    pub fn with_custom_content(mut self, content: impl CustomContent + 'static) -> Self {
        self.custom_content = Some(Box::new(content));
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: BannerIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the image shown when the icon is [`BannerIcon::Custom`].
    #[must_use]
    pub fn with_custom_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.custom_icon = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: BannerColor) -> Self {
        self.color = color;
        self
    }

    /// Overrides the color scheme. Only used when both colors are set.
    #[must_use]
    pub fn with_custom_colors(mut self, top: Option<Color>, bottom: Option<Color>) -> Self {
        self.custom_top_color = top;
        self.custom_bottom_color = bottom;
        self
    }

    #[must_use]
    pub fn with_asset_color(mut self, color: ContentColor) -> Self {
        self.asset_color = color;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: ContentColor) -> Self {
        self.text_color = color;
        self
    }

    /// Colors used by [`ContentColor::Manual`].
    #[must_use]
    pub fn with_manual_colors(mut self, text: Option<Color>, asset: Option<Color>) -> Self {
        self.manual_text_color = text;
        self.manual_asset_color = asset;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    #[must_use]
    pub fn with_vibrate(mut self, vibrate: bool) -> Self {
        self.vibrate = vibrate;
        self
    }

    /// Auto-dismiss delay. [`Duration::ZERO`] keeps the banner until hidden.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_message_max_length(mut self, length: usize) -> Self {
        self.message_max_length = length;
        self
    }

    #[must_use]
    pub fn with_dismiss_on_tap(mut self, dismiss: bool) -> Self {
        self.dismiss_on_tap = dismiss;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce(bool) + 'static) -> Self {
        self.completion = Completion::new(callback);
        self
    }

    // ------------------------------------------------------------------
    // Setters for fields read late in the lifecycle
    // ------------------------------------------------------------------

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn set_message_max_length(&mut self, length: usize) {
        self.message_max_length = length;
    }

    /// Takes effect if set before the entrance animation ends.
    pub fn set_sound(&mut self, sound: Option<String>) {
        self.sound = sound;
    }

    /// Takes effect if set before the entrance animation ends.
    pub fn set_vibrate(&mut self, vibrate: bool) {
        self.vibrate = vibrate;
    }

    /// Takes effect if set before the entrance animation ends.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn set_completion(&mut self, completion: Completion) {
        self.completion = completion;
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn context(&self) -> HostContext {
        self.context
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutDefaults {
        &self.layout
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The message as rendered, truncated to the maximum length.
    #[must_use]
    pub fn display_message(&self) -> Option<Cow<'_, str>> {
        self.message
            .as_deref()
            .map(|message| truncate(message, self.message_max_length))
    }

    #[must_use]
    pub fn custom_content(&self) -> Option<&dyn CustomContent> {
        self.custom_content.as_deref()
    }

    #[must_use]
    pub fn has_custom_content(&self) -> bool {
        self.custom_content.is_some()
    }

    #[must_use]
    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }

    #[must_use]
    pub fn message_max_length(&self) -> usize {
        self.message_max_length
    }

    #[must_use]
    pub fn icon(&self) -> BannerIcon {
        self.icon
    }

    #[must_use]
    pub fn custom_icon(&self) -> Option<&PathBuf> {
        self.custom_icon.as_ref()
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn color(&self) -> BannerColor {
        self.color
    }

    /// Background gradient, honoring the custom colors.
    #[must_use]
    pub fn gradient(&self) -> Gradient {
        Gradient::resolve(self.color, self.custom_top_color, self.custom_bottom_color)
    }

    /// Tint of the icon and anchor glyphs.
    #[must_use]
    pub fn asset_tint(&self) -> Option<Color> {
        self.asset_color.resolve(self.manual_asset_color)
    }

    /// Tint of the message text.
    #[must_use]
    pub fn text_tint(&self) -> Option<Color> {
        self.text_color.resolve(self.manual_text_color)
    }

    #[must_use]
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    #[must_use]
    pub fn vibrate(&self) -> bool {
        self.vibrate
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn dismiss_on_tap(&self) -> bool {
        self.dismiss_on_tap
    }

    #[must_use]
    pub fn was_tapped(&self) -> bool {
        self.tapped
    }

    #[must_use]
    pub fn host(&self) -> Option<ResolvedHost> {
        self.host
    }

    /// Height measured when the notification was shown.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn timer(&self) -> Option<DismissTimer> {
        self.timer
    }

    #[must_use]
    pub fn loaded_sound(&self) -> Option<&Sound> {
        self.loaded_sound.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> State {
        match self.phase {
            Phase::Unattached => State::Unattached,
            Phase::Presenting { .. } => State::Presenting,
            Phase::Visible => State::Visible,
            Phase::Dismissing { .. } => State::Dismissing,
            Phase::Detached => State::Detached,
        }
    }

    /// How much of the banner is shown, from 0 (off screen) to 1.
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Unattached | Phase::Detached => 0.0,
            Phase::Presenting { started } => progress(started, now, PRESENT_ANIMATION),
            Phase::Visible => 1.0,
            Phase::Dismissing { started } => 1.0 - progress(started, now, DISMISS_ANIMATION),
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    fn has_icon(&self) -> bool {
        match self.icon {
            BannerIcon::None => false,
            BannerIcon::Custom => self.custom_icon.is_some(),
            _ => true,
        }
    }

    /// Banner height for a host of the given width.
    #[must_use]
    pub fn measure(&self, host_width: f32) -> f32 {
        let available =
            self.layout
                .content_width(host_width, self.has_icon(), self.anchor != Anchor::None);
        let content = match (&self.custom_content, self.display_message()) {
            (Some(custom), _) => custom.desired_size(available),
            (None, Some(message)) => TextLabel::new(message.into_owned())
                .font_size(self.label_font_size)
                .desired_size(available),
            (None, None) => iced::Size::ZERO,
        };
        self.layout.banner_height(content.height)
    }

    // ------------------------------------------------------------------
    // Lifecycle (driven by the manager)
    // ------------------------------------------------------------------

    pub(crate) fn begin_presenting(&mut self, host: ResolvedHost, height: f32, now: Instant) {
        self.host = Some(host);
        self.height = height;
        self.phase = Phase::Presenting { started: now };
    }

    pub(crate) fn presentation_finished(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Presenting { started } if now.saturating_duration_since(started) >= PRESENT_ANIMATION)
    }

    /// Enters `Visible` and schedules the auto-dismissal, if any.
    pub(crate) fn enter_visible(&mut self, now: Instant) {
        self.phase = Phase::Visible;
        self.timer = (!self.delay.is_zero()).then(|| DismissTimer::schedule(now, self.delay));
    }

    pub(crate) fn hold_sound(&mut self, sound: Sound) {
        self.loaded_sound = Some(sound);
    }

    pub(crate) fn timer_fired(&self, now: Instant) -> bool {
        self.state() == State::Visible && self.timer.is_some_and(|timer| timer.has_fired(now))
    }

    /// Replaces the pending auto-dismissal of a visible banner.
    pub(crate) fn reschedule(&mut self, delay: Duration, now: Instant) -> bool {
        if self.state() != State::Visible {
            return false;
        }
        self.timer = Some(DismissTimer::schedule(now, delay));
        true
    }

    /// Starts the exit animation.
    ///
    /// Runs the completion callback first, then cancels the timer. Returns
    /// `false` (and does nothing) unless the banner is visible: a banner
    /// still sliding in finishes its entrance first.
    pub(crate) fn begin_dismissing(&mut self, tapped: bool, now: Instant) -> bool {
        if self.state() != State::Visible {
            return false;
        }

        self.tapped |= tapped;
        self.completion.fire(self.tapped);
        self.timer = None;
        self.phase = Phase::Dismissing { started: now };
        true
    }

    /// Records a tap, dismissing the banner when tap-to-dismiss applies.
    pub(crate) fn tap(&mut self, now: Instant) -> bool {
        if self.state() != State::Visible {
            return false;
        }

        if let Some(content) = self.custom_content.as_mut() {
            content.set_highlighted(true);
        }
        if self.dismiss_on_tap {
            self.begin_dismissing(true, now)
        } else {
            self.tapped = true;
            true
        }
    }

    pub(crate) fn dismissal_finished(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Dismissing { started } if now.saturating_duration_since(started) >= DISMISS_ANIMATION)
    }

    /// Enters the terminal state and releases held resources.
    pub(crate) fn detach(&mut self) {
        self.phase = Phase::Detached;
        self.timer = None;
        self.loaded_sound = None;
        self.completion = Completion::default();
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}
