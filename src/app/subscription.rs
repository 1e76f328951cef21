// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.

use super::Message;
use crate::config::TICK_INTERVAL;
use iced::{time, Subscription};

/// Creates the animation tick, active only while banners are registered.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
