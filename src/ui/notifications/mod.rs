// SPDX-License-Identifier: MPL-2.0
//! Banner notifications anchored to a host screen.
//!
//! A banner slides in from the top or bottom edge of its host, optionally
//! plays a sound and vibrates, stays for a configurable delay, and slides
//! out when the delay ends, when the user taps it, or when it is hidden.
//! Banners sharing a host and edge stack instead of overlapping.
//!
//! # Components
//!
//! - [`notification`] - `Notification` configuration and its lifecycle
//! - [`manager`] - `Manager`, the per-host registry driving every banner
//! - [`layout`] - Layout defaults, banner height and frame computation
//! - [`style`] - Color schemes
//! - [`icon`] - Embedded icon and anchor glyphs
//! - [`content`] - Custom content capability and the text label
//! - [`toast`] - Rendering of banners and host overlays
//!
//! # Usage
//!
//! ```no_run
//! use iced_banner::host::{HostBounds, HostContext, ScreenStack};
//! use iced_banner::ui::notifications::{BannerColor, Manager, Position};
//! use iced::{Point, Rectangle, Size};
//! use std::time::Instant;
//!
//! let bounds = HostBounds::new(Rectangle::new(Point::ORIGIN, Size::new(390.0, 844.0)));
//! let mut screens = ScreenStack::new(bounds);
//! screens.push(bounds);
//!
//! let mut manager = Manager::new();
//! let notification = manager
//!     .create(HostContext::TopMost)
//!     .with_message("Profile saved")
//!     .with_color(BannerColor::LightBlue)
//!     .with_position(Position::Bottom)
//!     .on_complete(|tapped| println!("tapped: {tapped}"));
//! manager.show(&screens, notification, Instant::now())?;
//! # Ok::<(), iced_banner::error::Error>(())
//! ```
//!
//! Animations and timers advance through [`Manager::tick`], usually fed by
//! an `iced::time::every` subscription while [`Manager::has_notifications`]
//! is true.

pub mod content;
pub mod icon;
pub mod layout;
pub mod manager;
pub mod notification;
pub mod style;
pub mod toast;

pub use content::{truncate, CustomContent, TextLabel};
pub use icon::{Anchor, BannerIcon};
pub use layout::LayoutDefaults;
pub use manager::{Manager, Message as NotificationMessage, Placement, ShowOptions};
pub use notification::{
    Completion, CompletionFn, DismissTimer, Notification, NotificationId, Position, State,
};
pub use style::{BannerColor, ContentColor, Gradient};
pub use toast::Toast;
