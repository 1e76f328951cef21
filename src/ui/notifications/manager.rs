// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the registry of presented banners. It keeps, per host,
//! the banners in presentation order (oldest first), drives their
//! animations and auto-dismiss timers from periodic ticks, and answers the
//! host-scoped queries. Hosts with no banners have no entry.

use super::icon::{Anchor, BannerIcon};
use super::layout::{animated_frame, resting_frame, LayoutDefaults};
use super::notification::{CompletionFn, Completion, Notification, NotificationId, Position, State};
use super::style::{BannerColor, ContentColor};
use crate::config::{DEFAULT_DELAY, DEFAULT_MESSAGE_MAX_LENGTH};
use crate::error::{HostError, Result};
use crate::feedback::{Feedback, SilentFeedback};
use crate::host::{HostBounds, HostContext, HostId, ScreenHierarchy};
use iced::Rectangle;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed a banner.
    Tapped(NotificationId),
    /// Advances animations and timers.
    Tick(Instant),
}

/// Display parameters of the one-shot [`Manager::show_message`] factory.
#[derive(Default)]
pub struct ShowOptions {
    pub icon: BannerIcon,
    pub anchor: Anchor,
    pub position: Position,
    pub color: BannerColor,
    pub asset_color: ContentColor,
    pub text_color: ContentColor,
    /// Auto-dismiss delay. `None` uses the manager's default delay.
    pub duration: Option<Duration>,
    pub completion: Option<CompletionFn>,
}

/// Where a banner is drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: NotificationId,
    pub frame: Rectangle,
    pub opacity: f32,
}

/// Registry of presented notifications, keyed by host.
pub struct Manager {
    hosts: HashMap<HostId, Vec<Notification>>,
    layout: LayoutDefaults,
    default_delay: Duration,
    message_max_length: usize,
    feedback: Box<dyn Feedback>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_feedback(SilentFeedback)
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("hosts", &self.hosts)
            .field("layout", &self.layout)
            .field("default_delay", &self.default_delay)
            .field("message_max_length", &self.message_max_length)
            .finish_non_exhaustive()
    }
}

impl Manager {
    /// Creates an empty manager without sound or vibration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager playing sounds and vibrations through `feedback`.
    #[must_use]
    pub fn with_feedback(feedback: impl Feedback + 'static) -> Self {
        Self {
            hosts: HashMap::new(),
            layout: LayoutDefaults::default(),
            default_delay: DEFAULT_DELAY,
            message_max_length: DEFAULT_MESSAGE_MAX_LENGTH,
            feedback: Box::new(feedback),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutDefaults) -> Self {
        self.layout = layout;
        self
    }

    // ------------------------------------------------------------------
    // Defaults for notifications created afterwards
    // ------------------------------------------------------------------

    #[must_use]
    pub fn layout(&self) -> &LayoutDefaults {
        &self.layout
    }

    pub fn register_minimum_height(&mut self, height: f32) {
        self.layout.set_minimum_height(height);
    }

    pub fn register_content_margin_height(&mut self, margin: f32) {
        self.layout.set_content_margin_height(margin);
    }

    pub fn register_default_offset_x(&mut self, offset: f32) {
        self.layout.set_default_offset_x(offset);
    }

    #[must_use]
    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    pub fn set_default_delay(&mut self, delay: Duration) {
        self.default_delay = delay;
    }

    pub fn set_message_max_length(&mut self, length: usize) {
        self.message_max_length = length;
    }

    /// Creates an unattached notification with the current defaults.
    #[must_use]
    pub fn create(&self, context: HostContext) -> Notification {
        Notification::new(context, self.layout)
            .with_delay(self.default_delay)
            .with_message_max_length(self.message_max_length)
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    /// Registers `notification` at the tail of its host and starts the
    /// entrance animation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`](crate::error::Error::Host) when the context
    /// does not resolve to a known host. Nothing is registered then.
    pub fn show(
        &mut self,
        screens: &dyn ScreenHierarchy,
        mut notification: Notification,
        now: Instant,
    ) -> Result<NotificationId> {
        let resolved = screens.resolve(notification.context())?;
        let bounds = screens
            .bounds(resolved.host)
            .ok_or(HostError::UnknownHost(resolved.host.raw()))?;

        let height = notification.measure(bounds.frame.width);
        notification.begin_presenting(resolved, height, now);

        let id = notification.id();
        debug!(
            id = %id,
            host = %resolved.host,
            position = %notification.position(),
            height,
            "presenting notification"
        );
        self.hosts.entry(resolved.host).or_default().push(notification);
        Ok(id)
    }

    /// Builds a text notification from `options` and shows it.
    ///
    /// The returned id gives access to the instance through
    /// [`get_mut`](Self::get_mut) while transient fields can still change.
    ///
    /// # Errors
    ///
    /// Same as [`show`](Self::show).
    pub fn show_message(
        &mut self,
        screens: &dyn ScreenHierarchy,
        context: HostContext,
        message: impl Into<String>,
        options: ShowOptions,
        now: Instant,
    ) -> Result<NotificationId> {
        let mut notification = self
            .create(context)
            .with_message(message)
            .with_icon(options.icon)
            .with_anchor(options.anchor)
            .with_position(options.position)
            .with_color(options.color)
            .with_asset_color(options.asset_color)
            .with_text_color(options.text_color);
        if let Some(duration) = options.duration {
            notification.set_delay(duration);
        }
        if let Some(callback) = options.completion {
            notification.set_completion(Completion::new(callback));
        }
        self.show(screens, notification, now)
    }

    /// Starts dismissing a notification. Returns whether it was presenting
    /// or visible.
    pub fn hide(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.get_mut(id) else {
            return false;
        };
        let hidden = notification.begin_dismissing(false, now);
        if hidden {
            debug!(id = %id, was_tapped = notification.was_tapped(), "dismissing notification");
        }
        hidden
    }

    /// Replaces the auto-dismiss timer of a visible notification.
    ///
    /// A zero delay hides it right away.
    pub fn hide_after_delay(&mut self, id: NotificationId, delay: Duration, now: Instant) -> bool {
        if delay.is_zero() {
            return self.hide(id, now);
        }
        self.get_mut(id)
            .is_some_and(|notification| notification.reschedule(delay, now))
    }

    /// Handles a press on a banner.
    pub fn tap(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.get_mut(id) else {
            return false;
        };
        let handled = notification.tap(now);
        if handled {
            debug!(
                id = %id,
                dismissing = notification.state() == State::Dismissing,
                "notification tapped"
            );
        }
        handled
    }

    /// Advances every notification to `now`.
    ///
    /// Finished entrance animations make banners visible (playing their
    /// sound and vibration), expired timers start dismissals, and finished
    /// exit animations remove banners from the registry.
    pub fn tick(&mut self, now: Instant) {
        let Self {
            hosts, feedback, ..
        } = self;

        for notifications in hosts.values_mut() {
            for notification in notifications.iter_mut() {
                if notification.presentation_finished(now) {
                    notification.enter_visible(now);
                    play_feedback(feedback.as_mut(), notification);
                    trace!(id = %notification.id(), "notification visible");
                }
                if notification.timer_fired(now) && notification.begin_dismissing(false, now) {
                    debug!(id = %notification.id(), "auto-dismissing notification");
                }
            }

            notifications.retain_mut(|notification| {
                if notification.dismissal_finished(now) {
                    notification.detach();
                    debug!(id = %notification.id(), "notification detached");
                    false
                } else {
                    true
                }
            });
        }

        hosts.retain(|_, notifications| !notifications.is_empty());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tapped(id) => {
                self.tap(*id, Instant::now());
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    // ------------------------------------------------------------------
    // Host-scoped queries
    // ------------------------------------------------------------------

    /// The most recently shown notification on `host`.
    #[must_use]
    pub fn notification_for(&self, host: HostId) -> Option<&Notification> {
        self.hosts.get(&host).and_then(|notifications| notifications.last())
    }

    /// All notifications on `host`, oldest first.
    #[must_use]
    pub fn all_notifications_for(&self, host: HostId) -> &[Notification] {
        self.hosts.get(&host).map_or(&[], Vec::as_slice)
    }

    /// Hides the most recent notification on `host`. Returns whether `host`
    /// had one.
    pub fn hide_last_on(&mut self, host: HostId, now: Instant) -> bool {
        let Some(id) = self.notification_for(host).map(Notification::id) else {
            return false;
        };
        self.hide(id, now);
        true
    }

    /// Hides every notification on `host`.
    ///
    /// Returns the number of notifications registered on `host` at call
    /// time. Only visible ones start dismissing; the others are counted but
    /// left alone, as [`hide`](Self::hide) is a no-op for them.
    pub fn hide_all_on(&mut self, host: HostId, now: Instant) -> usize {
        let snapshot: Vec<NotificationId> = self
            .all_notifications_for(host)
            .iter()
            .map(Notification::id)
            .collect();
        for id in &snapshot {
            self.hide(*id, now);
        }
        debug!(host = %host, count = snapshot.len(), "hiding all notifications");
        snapshot.len()
    }

    /// Like [`hide_last_on`](Self::hide_last_on), but acts on the top-most
    /// screen whenever `host` is not the top-most one.
    pub fn hide_last_for(
        &mut self,
        screens: &dyn ScreenHierarchy,
        host: HostId,
        now: Instant,
    ) -> bool {
        self.hide_last_on(top_most_or(screens, host), now)
    }

    /// Like [`hide_all_on`](Self::hide_all_on), but acts on the top-most
    /// screen whenever `host` is not the top-most one.
    pub fn hide_all_for(
        &mut self,
        screens: &dyn ScreenHierarchy,
        host: HostId,
        now: Instant,
    ) -> usize {
        self.hide_all_on(top_most_or(screens, host), now)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.hosts.values().flatten().find(|n| n.id() == id)
    }

    /// Mutable access to a shown notification.
    pub fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.hosts.values_mut().flatten().find(|n| n.id() == id)
    }

    /// Hosts that currently have notifications.
    pub fn hosts(&self) -> impl Iterator<Item = HostId> + '_ {
        self.hosts.keys().copied()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.hosts.values().map(Vec::len).sum()
    }

    /// Returns whether any notification is registered.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.hosts.is_empty()
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Frame of a notification once fully presented, accounting for the
    /// banners registered before it on the same host and position.
    #[must_use]
    pub fn resting_frame(&self, screens: &dyn ScreenHierarchy, id: NotificationId) -> Option<Rectangle> {
        let notification = self.get(id)?;
        let resolved = notification.host()?;
        let bounds = screens.bounds(resolved.host)?;
        let offset = stack_offset(&bounds, self.all_notifications_for(resolved.host), id);
        Some(resting_frame(
            &bounds,
            resolved.layer,
            notification.position(),
            notification.height(),
            offset,
        ))
    }

    /// Where each notification of `host` is drawn at `now`, oldest first.
    #[must_use]
    pub fn placements(
        &self,
        screens: &dyn ScreenHierarchy,
        host: HostId,
        now: Instant,
    ) -> Vec<Placement> {
        let Some(bounds) = screens.bounds(host) else {
            return Vec::new();
        };
        let notifications = self.all_notifications_for(host);

        notifications
            .iter()
            .filter_map(|notification| {
                let layer = notification.host()?.layer;
                let offset = stack_offset(&bounds, notifications, notification.id());
                let rest = resting_frame(
                    &bounds,
                    layer,
                    notification.position(),
                    notification.height(),
                    offset,
                );
                let (frame, opacity) =
                    animated_frame(rest, notification.position(), notification.visibility(now));
                Some(Placement {
                    id: notification.id(),
                    frame,
                    opacity,
                })
            })
            .collect()
    }
}

/// Distance between the host edge and the resting frame of `id`.
///
/// Earlier banners at the same position stack outwards from the edge, so
/// each one starts where the previous one ends. Banners on different layers
/// of one host (below and above the status bar) share the same stack; a
/// banner never starts before its own layer's edge.
fn stack_offset(bounds: &HostBounds, notifications: &[Notification], id: NotificationId) -> f32 {
    let Some(index) = notifications.iter().position(|n| n.id() == id) else {
        return 0.0;
    };
    let target = &notifications[index];
    let Some(layer) = target.host().map(|host| host.layer) else {
        return 0.0;
    };
    let position = target.position();

    let earlier = notifications[..index]
        .iter()
        .filter(|n| n.position() == position)
        .filter_map(|n| n.host().map(|host| (host.layer, n.height())));

    match position {
        Position::Top => {
            let end = earlier.fold(f32::NEG_INFINITY, |end, (layer, height)| {
                bounds.top_edge(layer).max(end) + height
            });
            (end - bounds.top_edge(layer)).max(0.0)
        }
        Position::Bottom => {
            let end = earlier.fold(f32::INFINITY, |end, (layer, height)| {
                bounds.bottom_edge(layer).min(end) - height
            });
            (bounds.bottom_edge(layer) - end).max(0.0)
        }
    }
}

fn top_most_or(screens: &dyn ScreenHierarchy, host: HostId) -> HostId {
    match screens.top_most() {
        Some(top) if top != host => {
            debug!(requested = %host, top_most = %top, "redirecting to top-most screen");
            top
        }
        _ => host,
    }
}

/// Sound and vibration at the end of the entrance animation. Failures are
/// logged and ignored.
fn play_feedback(feedback: &mut dyn Feedback, notification: &mut Notification) {
    if let Some(name) = notification.sound().map(str::to_owned) {
        match feedback.load_sound(&name) {
            Ok(sound) => {
                feedback.play(&sound);
                notification.hold_sound(sound);
            }
            Err(err) => warn!(sound = %name, error = %err, "notification sound unavailable"),
        }
    }
    if notification.vibrate() {
        feedback.vibrate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DISMISS_ANIMATION, PRESENT_ANIMATION};
    use crate::error::Error;
    use crate::host::ScreenStack;
    use crate::test_utils::{assert_abs_diff_eq, phone, RecordingFeedback, MISSING_SOUND};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn screens() -> (ScreenStack, HostId) {
        phone()
    }

    fn after(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    /// Ticks past the entrance animation.
    fn settle(manager: &mut Manager, start: Instant) -> Instant {
        let now = start + PRESENT_ANIMATION;
        manager.tick(now);
        now
    }

    fn completions() -> (Rc<RefCell<Vec<bool>>>, impl FnOnce(bool) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |tapped| sink.borrow_mut().push(tapped))
    }

    #[test]
    fn new_manager_is_empty() {
        let (_, host) = screens();
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert!(manager.notification_for(host).is_none());
        assert!(manager.all_notifications_for(host).is_empty());
    }

    #[test]
    fn show_registers_at_the_tail() {
        let (stack, host) = screens();
        let mut manager = Manager::new();
        let now = Instant::now();

        let first = manager
            .show(&stack, manager.create(HostContext::TopMost).with_message("one"), now)
            .expect("show");
        let second = manager
            .show(&stack, manager.create(HostContext::Screen(host)).with_message("two"), now)
            .expect("show");

        assert_eq!(manager.notification_for(host).map(Notification::id), Some(second));
        let ids: Vec<_> = manager.all_notifications_for(host).iter().map(Notification::id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(manager.get(first).map(Notification::state), Some(State::Presenting));
    }

    #[test]
    fn unresolvable_context_registers_nothing() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let context = HostContext::Screen(HostId::new(42));

        let result = manager.show(&stack, manager.create(context), Instant::now());
        assert_eq!(result, Err(Error::Host(HostError::UnknownHost(42))));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn status_bar_contexts_use_root_host() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::BelowStatusBar), now)
            .expect("show");

        let root = stack.root().expect("root");
        assert_eq!(manager.notification_for(root).map(Notification::id), Some(id));
        let frame = manager.resting_frame(&stack, id).expect("frame");
        assert_abs_diff_eq!(frame.y, 24.0);
    }

    #[test]
    fn entrance_plays_sound_and_vibrates_once() {
        let (stack, _) = screens();
        let feedback = RecordingFeedback::default();
        let record = Rc::clone(&feedback.0);
        let mut manager = Manager::with_feedback(feedback);
        let start = Instant::now();

        let id = manager
            .show(
                &stack,
                manager
                    .create(HostContext::TopMost)
                    .with_sound("bell.wav")
                    .with_vibrate(true),
                start,
            )
            .expect("show");

        manager.tick(after(start, 100));
        assert!(record.borrow().played.is_empty());

        let now = settle(&mut manager, start);
        manager.tick(now + Duration::from_millis(16));
        assert_eq!(record.borrow().played, vec!["bell.wav".to_owned()]);
        assert_eq!(record.borrow().vibrations, 1);
        assert!(manager.get(id).and_then(Notification::loaded_sound).is_some());
    }

    #[test]
    fn transient_fields_can_change_after_show() {
        let (stack, _) = screens();
        let feedback = RecordingFeedback::default();
        let record = Rc::clone(&feedback.0);
        let mut manager = Manager::with_feedback(feedback);
        let start = Instant::now();

        let id = manager
            .show_message(&stack, HostContext::TopMost, "Hi", ShowOptions::default(), start)
            .expect("show");
        let notification = manager.get_mut(id).expect("registered");
        notification.set_sound(Some("chime.wav".to_owned()));
        notification.set_vibrate(true);

        settle(&mut manager, start);
        assert_eq!(record.borrow().played, vec!["chime.wav".to_owned()]);
        assert_eq!(record.borrow().vibrations, 1);
    }

    #[test]
    fn missing_sound_does_not_block_presentation() {
        let (stack, _) = screens();
        let mut manager = Manager::with_feedback(RecordingFeedback::default());
        let start = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).with_sound(MISSING_SOUND), start)
            .expect("show");

        settle(&mut manager, start);
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Visible));
    }

    #[test]
    fn timer_dismisses_and_reports_not_tapped() {
        let (stack, host) = screens();
        let mut manager = Manager::new();
        let (calls, callback) = completions();
        let start = Instant::now();

        let options = ShowOptions {
            duration: Some(Duration::from_secs(1)),
            completion: Some(Box::new(callback)),
            ..ShowOptions::default()
        };
        let id = manager
            .show_message(&stack, HostContext::TopMost, "Saved", options, start)
            .expect("show");

        let visible_at = settle(&mut manager, start);
        manager.tick(visible_at + Duration::from_millis(999));
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Visible));

        let fired_at = visible_at + Duration::from_secs(1);
        manager.tick(fired_at);
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Dismissing));
        assert_eq!(*calls.borrow(), vec![false]);

        manager.tick(fired_at + DISMISS_ANIMATION);
        assert!(manager.get(id).is_none());
        assert!(manager.all_notifications_for(host).is_empty());
        assert!(!manager.has_notifications());
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn tap_dismisses_and_reports_tapped() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let (calls, callback) = completions();
        let start = Instant::now();

        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).on_complete(callback), start)
            .expect("show");
        let now = settle(&mut manager, start);

        assert!(manager.tap(id, now));
        assert_eq!(*calls.borrow(), vec![true]);

        // Neither a second tap nor the old timer deadline fire again.
        assert!(!manager.tap(id, now));
        manager.tick(now + DEFAULT_DELAY);
        assert_eq!(*calls.borrow(), vec![true]);
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn zero_delay_stays_until_hidden() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).with_delay(Duration::ZERO), start)
            .expect("show");

        settle(&mut manager, start);
        manager.tick(start + Duration::from_secs(3600));
        let notification = manager.get(id).expect("still registered");
        assert_eq!(notification.state(), State::Visible);
        assert!(notification.timer().is_none());

        assert!(manager.hide(id, start + Duration::from_secs(3600)));
    }

    #[test]
    fn default_delay_applies_when_duration_is_absent() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        manager.set_default_delay(Duration::from_secs(7));
        let start = Instant::now();
        let id = manager
            .show_message(&stack, HostContext::TopMost, "Hi", ShowOptions::default(), start)
            .expect("show");
        assert_eq!(manager.get(id).map(Notification::delay), Some(Duration::from_secs(7)));
    }

    #[test]
    fn hide_is_noop_once_dismissing() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let (calls, callback) = completions();
        let start = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).on_complete(callback), start)
            .expect("show");
        let now = settle(&mut manager, start);

        assert!(manager.hide(id, now));
        assert!(!manager.hide(id, now));
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn hide_after_delay_replaces_timer() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).with_delay(Duration::ZERO), start)
            .expect("show");
        let now = settle(&mut manager, start);

        assert!(manager.hide_after_delay(id, Duration::from_millis(500), now));
        manager.tick(now + Duration::from_millis(500));
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Dismissing));
    }

    #[test]
    fn hide_last_targets_the_tail() {
        let (stack, host) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let first = manager.show(&stack, manager.create(HostContext::TopMost), start).expect("show");
        let second = manager.show(&stack, manager.create(HostContext::TopMost), start).expect("show");
        let now = settle(&mut manager, start);

        assert!(manager.hide_last_on(host, now));
        assert_eq!(manager.get(second).map(Notification::state), Some(State::Dismissing));
        assert_eq!(manager.get(first).map(Notification::state), Some(State::Visible));
    }

    #[test]
    fn hide_on_empty_host_is_noop() {
        let (_, host) = screens();
        let mut manager = Manager::new();
        let now = Instant::now();
        assert!(!manager.hide_last_on(host, now));
        assert_eq!(manager.hide_all_on(host, now), 0);
    }

    #[test]
    fn hide_all_counts_and_clears_host() {
        let (stack, host) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        for position in [Position::Top, Position::Top, Position::Bottom] {
            manager
                .show(&stack, manager.create(HostContext::TopMost).with_position(position), start)
                .expect("show");
        }
        let now = settle(&mut manager, start);
        let late = manager
            .show(&stack, manager.create(HostContext::TopMost), now)
            .expect("show");

        // Every registered banner is counted; the one still sliding in stays.
        assert_eq!(manager.hide_all_on(host, now), 4);
        let states: Vec<State> = manager
            .all_notifications_for(host)
            .iter()
            .map(Notification::state)
            .collect();
        assert_eq!(
            states,
            vec![State::Dismissing, State::Dismissing, State::Dismissing, State::Presenting]
        );

        manager.tick(now + DISMISS_ANIMATION);
        let remaining: Vec<_> = manager.all_notifications_for(host).iter().map(Notification::id).collect();
        assert_eq!(remaining, vec![late]);

        let visible_at = settle(&mut manager, now);
        assert_eq!(manager.hide_all_on(host, visible_at), 1);
        manager.tick(visible_at + DISMISS_ANIMATION);
        assert!(manager.all_notifications_for(host).is_empty());
        assert!(manager.notification_for(host).is_none());
    }

    #[test]
    fn hide_and_tap_are_ignored_while_presenting() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let (calls, callback) = completions();
        let start = Instant::now();
        let id = manager
            .show(&stack, manager.create(HostContext::TopMost).on_complete(callback), start)
            .expect("show");

        assert!(!manager.hide(id, after(start, 10)));
        assert!(!manager.tap(id, after(start, 20)));
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Presenting));
        assert!(calls.borrow().is_empty());

        let now = settle(&mut manager, start);
        assert!(manager.hide(id, now));
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn controller_variants_redirect_to_top_most() {
        let (mut stack, inbox) = screens();
        let bounds = stack.bounds(inbox).expect("bounds");
        let mut manager = Manager::new();
        let start = Instant::now();

        manager
            .show(&stack, manager.create(HostContext::Screen(inbox)), start)
            .expect("show");
        let settings = stack.push(bounds);
        let on_settings = manager
            .show(&stack, manager.create(HostContext::TopMost), start)
            .expect("show");
        let now = settle(&mut manager, start);

        // `inbox` is not top-most, so the call acts on `settings`.
        assert!(manager.hide_last_for(&stack, inbox, now));
        assert_eq!(manager.get(on_settings).map(Notification::state), Some(State::Dismissing));
        assert_eq!(
            manager.notification_for(inbox).map(Notification::state),
            Some(State::Visible)
        );
        assert_eq!(manager.hide_all_for(&stack, settings, now), 1);
    }

    #[test]
    fn stacked_banners_reflow_after_dismissal() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();

        let first = manager
            .show(&stack, manager.create(HostContext::TopMost).with_delay(Duration::ZERO), start)
            .expect("show");
        let second = manager
            .show(&stack, manager.create(HostContext::TopMost).with_delay(Duration::ZERO), start)
            .expect("show");
        let now = settle(&mut manager, start);

        let first_frame = manager.resting_frame(&stack, first).expect("frame");
        let second_frame = manager.resting_frame(&stack, second).expect("frame");
        assert_abs_diff_eq!(second_frame.y, first_frame.y + first_frame.height);

        manager.hide(first, now);
        manager.tick(now + DISMISS_ANIMATION);
        let reflowed = manager.resting_frame(&stack, second).expect("frame");
        assert_abs_diff_eq!(reflowed.y, first_frame.y);
    }

    #[test]
    fn status_bar_layers_share_one_stack() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();

        let below = manager
            .show(&stack, manager.create(HostContext::BelowStatusBar), start)
            .expect("show");
        let above = manager
            .show(&stack, manager.create(HostContext::AboveStatusBar), start)
            .expect("show");

        let below_frame = manager.resting_frame(&stack, below).expect("frame");
        let above_frame = manager.resting_frame(&stack, above).expect("frame");
        assert_abs_diff_eq!(below_frame.y, 24.0);
        assert_abs_diff_eq!(above_frame.y, below_frame.y + below_frame.height);
        assert!(below_frame.intersection(&above_frame).is_none());
    }

    #[test]
    fn stack_never_starts_before_a_layer_edge() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();

        let above = manager
            .show(&stack, manager.create(HostContext::AboveStatusBar), start)
            .expect("show");
        let below = manager
            .show(&stack, manager.create(HostContext::BelowStatusBar), start)
            .expect("show");

        let above_frame = manager.resting_frame(&stack, above).expect("frame");
        let below_frame = manager.resting_frame(&stack, below).expect("frame");
        assert_abs_diff_eq!(above_frame.y, 0.0);
        assert_abs_diff_eq!(below_frame.y, above_frame.height.max(24.0));
        assert!(above_frame.intersection(&below_frame).is_none());
    }

    #[test]
    fn bottom_banners_stack_upwards() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let notification = || manager.create(HostContext::TopMost).with_position(Position::Bottom);

        let first = notification();
        let second = notification();
        let first = manager.show(&stack, first, start).expect("show");
        let second = manager.show(&stack, second, start).expect("show");

        let first_frame = manager.resting_frame(&stack, first).expect("frame");
        let second_frame = manager.resting_frame(&stack, second).expect("frame");
        assert_abs_diff_eq!(second_frame.y, first_frame.y - second_frame.height);
        assert_abs_diff_eq!(first_frame.y + first_frame.height, 844.0 - 34.0);
    }

    #[test]
    fn layout_changes_only_affect_new_notifications() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let before = manager
            .show(&stack, manager.create(HostContext::TopMost).with_message("Hi"), start)
            .expect("show");

        manager.register_minimum_height(90.0);
        let after = manager
            .show(&stack, manager.create(HostContext::TopMost).with_message("Hi"), start)
            .expect("show");

        assert_abs_diff_eq!(manager.get(before).map_or(0.0, Notification::height), 54.0);
        assert_abs_diff_eq!(manager.get(after).map_or(0.0, Notification::height), 90.0);
    }

    #[test]
    fn placements_slide_in_from_the_edge() {
        let (stack, host) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.show(&stack, manager.create(HostContext::TopMost), start).expect("show");
        let rest = manager.resting_frame(&stack, id).expect("frame");

        let hidden = manager.placements(&stack, host, start);
        assert_eq!(hidden.len(), 1);
        assert_abs_diff_eq!(hidden[0].frame.y, rest.y - rest.height);
        assert_abs_diff_eq!(hidden[0].opacity, 0.0);

        let now = settle(&mut manager, start);
        let shown = manager.placements(&stack, host, now);
        assert_eq!(shown[0].frame, rest);
        assert_abs_diff_eq!(shown[0].opacity, 1.0);
    }

    #[test]
    fn handle_message_routes_ticks_and_taps() {
        let (stack, _) = screens();
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.show(&stack, manager.create(HostContext::TopMost), start).expect("show");

        manager.handle_message(&Message::Tick(start + PRESENT_ANIMATION));
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Visible));

        manager.handle_message(&Message::Tapped(id));
        assert_eq!(manager.get(id).map(Notification::state), Some(State::Dismissing));
        assert!(manager.get(id).is_some_and(Notification::was_tapped));
    }
}
