// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Banner height, vertical content margin, horizontal inset
//! - **Message**: Truncation length and label font size
//! - **Timing**: Auto-dismiss delay and animation durations

use std::time::Duration;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default minimum banner height.
pub const DEFAULT_MINIMUM_HEIGHT: f32 = 54.0;

/// Smallest minimum height accepted by the layout setters.
pub const MIN_MINIMUM_HEIGHT: f32 = 20.0;

/// Largest minimum height accepted by the layout setters.
pub const MAX_MINIMUM_HEIGHT: f32 = 200.0;

/// Default vertical padding above and below the message or custom content.
pub const DEFAULT_CONTENT_MARGIN_HEIGHT: f32 = 16.0;

/// Smallest content margin.
pub const MIN_CONTENT_MARGIN_HEIGHT: f32 = 0.0;

/// Largest content margin.
pub const MAX_CONTENT_MARGIN_HEIGHT: f32 = 64.0;

/// Default horizontal inset of the banner content from the host edges.
pub const DEFAULT_OFFSET_X: f32 = 16.0;

/// Smallest horizontal inset.
pub const MIN_OFFSET_X: f32 = 0.0;

/// Largest horizontal inset.
pub const MAX_OFFSET_X: f32 = 128.0;

// ==========================================================================
// Message Defaults
// ==========================================================================

/// Messages longer than this many characters are truncated.
pub const DEFAULT_MESSAGE_MAX_LENGTH: usize = 150;

/// Marker appended to a truncated message.
pub const ELLIPSIS: &str = "...";

/// Default font size of the built-in text label.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 15.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay. Zero would disable auto-dismiss.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3500);

/// Largest delay the demo slider offers.
pub const MAX_DELAY: Duration = Duration::from_secs(10);

/// Duration of the slide + fade entrance animation.
pub const PRESENT_ANIMATION: Duration = Duration::from_millis(300);

/// Duration of the exit animation from a fully visible banner.
pub const DISMISS_ANIMATION: Duration = Duration::from_millis(250);

/// Interval of the animation tick subscription while banners are shown.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
