// SPDX-License-Identifier: MPL-2.0
use iced::Rectangle;
use iced_banner::config::{self, Config, DEFAULT_DELAY, PRESENT_ANIMATION};
use iced_banner::error::{Error, HostError};
use iced_banner::host::{HostBounds, HostContext, HostId, ScreenStack};
use iced_banner::ui::notifications::{Manager, Position, ShowOptions, State};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn device() -> (ScreenStack, HostId) {
    let bounds = HostBounds::new(Rectangle::new([0.0, 0.0].into(), [390.0, 844.0].into()))
        .with_safe_area(44.0, 34.0)
        .with_status_bar(24.0);
    let mut screens = ScreenStack::new(bounds);
    let inbox = screens.push(bounds);
    (screens, inbox)
}

fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn() -> Box<dyn FnOnce(bool)>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let make = move || {
        let sink = Rc::clone(&sink);
        Box::new(move |tapped: bool| sink.borrow_mut().push(tapped)) as Box<dyn FnOnce(bool)>
    };
    (calls, make)
}

#[test]
fn banner_lifecycle_runs_to_detached_and_reports_once() {
    let (screens, inbox) = device();
    let (calls, make) = recorder();
    let mut manager = Manager::new();
    let start = Instant::now();

    let id = manager
        .show_message(
            &screens,
            HostContext::TopMost,
            "Saved",
            ShowOptions {
                completion: Some(make()),
                ..ShowOptions::default()
            },
            start,
        )
        .expect("top-most screen resolves");

    assert_eq!(manager.get(id).map(|n| n.state()), Some(State::Presenting));
    assert_eq!(manager.notification_for(inbox).map(|n| n.id()), Some(id));

    manager.tick(start + PRESENT_ANIMATION);
    assert_eq!(manager.get(id).map(|n| n.state()), Some(State::Visible));

    let expiry = start + PRESENT_ANIMATION + DEFAULT_DELAY;
    manager.tick(expiry);
    assert_eq!(manager.get(id).map(|n| n.state()), Some(State::Dismissing));
    assert_eq!(*calls.borrow(), vec![false]);

    manager.tick(expiry + Duration::from_secs(1));
    assert!(manager.get(id).is_none());
    assert!(!manager.has_notifications());
    assert_eq!(*calls.borrow(), vec![false]);
}

#[test]
fn zero_delay_keeps_banner_until_hidden() {
    let (screens, inbox) = device();
    let mut manager = Manager::new();
    let start = Instant::now();

    let id = manager
        .show_message(
            &screens,
            HostContext::Screen(inbox),
            "Sticky",
            ShowOptions {
                duration: Some(Duration::ZERO),
                ..ShowOptions::default()
            },
            start,
        )
        .expect("inbox resolves");

    manager.tick(start + PRESENT_ANIMATION);
    manager.tick(start + Duration::from_secs(60));
    assert_eq!(manager.get(id).map(|n| n.state()), Some(State::Visible));

    assert!(manager.hide_last_on(inbox, start + Duration::from_secs(61)));
    manager.tick(start + Duration::from_secs(62));
    assert!(manager.notification_for(inbox).is_none());
}

#[test]
fn hide_all_dismisses_every_banner_on_the_host() {
    let (screens, inbox) = device();
    let (calls, make) = recorder();
    let mut manager = Manager::new();
    let start = Instant::now();

    for message in ["one", "two", "three"] {
        manager
            .show_message(
                &screens,
                HostContext::Screen(inbox),
                message,
                ShowOptions {
                    completion: Some(make()),
                    ..ShowOptions::default()
                },
                start,
            )
            .expect("inbox resolves");
    }
    manager.tick(start + PRESENT_ANIMATION);

    assert_eq!(manager.hide_all_on(inbox, start + PRESENT_ANIMATION), 3);
    assert_eq!(*calls.borrow(), vec![false, false, false]);

    manager.tick(start + Duration::from_secs(2));
    assert!(manager.all_notifications_for(inbox).is_empty());
}

#[test]
fn stacked_banners_reflow_when_one_leaves() {
    let (screens, inbox) = device();
    let mut manager = Manager::new();
    let start = Instant::now();

    let show = |manager: &mut Manager, position| {
        manager
            .show_message(
                &screens,
                HostContext::Screen(inbox),
                "Stacked",
                ShowOptions {
                    position,
                    ..ShowOptions::default()
                },
                start,
            )
            .expect("inbox resolves")
    };
    let first = show(&mut manager, Position::Top);
    let second = show(&mut manager, Position::Top);
    let bottom = show(&mut manager, Position::Bottom);

    let first_frame = manager.resting_frame(&screens, first).expect("first is shown");
    let second_frame = manager.resting_frame(&screens, second).expect("second is shown");
    assert_eq!(first_frame.y, 44.0);
    assert_eq!(second_frame.y, first_frame.y + first_frame.height);

    let bottom_frame = manager.resting_frame(&screens, bottom).expect("bottom is shown");
    assert_eq!(bottom_frame.y + bottom_frame.height, 844.0 - 34.0);

    manager.tick(start + PRESENT_ANIMATION);
    manager.hide(first, start + PRESENT_ANIMATION);
    manager.tick(start + Duration::from_secs(2));

    let reflowed = manager.resting_frame(&screens, second).expect("second is still shown");
    assert_eq!(reflowed.y, 44.0);
}

#[test]
fn status_bar_contexts_attach_to_the_root_window() {
    let (screens, inbox) = device();
    let mut manager = Manager::new();
    let now = Instant::now();
    let root = HostId::new(0);

    let below = manager
        .show_message(&screens, HostContext::BelowStatusBar, "Below", ShowOptions::default(), now)
        .expect("root resolves");
    let above = manager
        .show_message(&screens, HostContext::AboveStatusBar, "Above", ShowOptions::default(), now)
        .expect("root resolves");

    assert_eq!(manager.all_notifications_for(root).len(), 2);
    assert!(manager.all_notifications_for(inbox).is_empty());

    // Both layers share the root's top stack: the later banner goes below.
    let below_frame = manager.resting_frame(&screens, below).expect("frame");
    let above_frame = manager.resting_frame(&screens, above).expect("frame");
    assert_eq!(below_frame.y, 24.0);
    assert_eq!(above_frame.y, below_frame.y + below_frame.height);
    assert!(below_frame.intersection(&above_frame).is_none());
}

#[test]
fn unknown_host_is_rejected_without_registering() {
    let (screens, _) = device();
    let mut manager = Manager::new();

    let result = manager.show_message(
        &screens,
        HostContext::Screen(HostId::new(99)),
        "Lost",
        ShowOptions::default(),
        Instant::now(),
    );

    assert_eq!(result, Err(Error::Host(HostError::UnknownHost(99))));
    assert_eq!(manager.count(), 0);
}

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut initial = Config::default();
    initial.notification.default_delay_ms = Some(0);
    initial.notification.message_max_length = Some(42);
    initial.layout.minimum_height = Some(80.0);
    config::save_with_override(&initial, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, initial);
    assert_eq!(loaded.default_delay(), Duration::ZERO);
    assert_eq!(loaded.message_max_length(), 42);
    assert_eq!(loaded.layout_defaults().minimum_height(), 80.0);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn broken_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[layout\nminimum_height = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
