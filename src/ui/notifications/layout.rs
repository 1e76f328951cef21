// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! A banner spans the full width of its host. Its height grows with its
//! content but never drops below the minimum height. Banners sharing a host
//! and a position stack: each one is pushed away from the edge by the sum of
//! the heights of the banners registered before it.

use super::Position;
use crate::config::{
    DEFAULT_CONTENT_MARGIN_HEIGHT, DEFAULT_MINIMUM_HEIGHT, DEFAULT_OFFSET_X,
    MAX_CONTENT_MARGIN_HEIGHT, MAX_MINIMUM_HEIGHT, MAX_OFFSET_X, MIN_CONTENT_MARGIN_HEIGHT,
    MIN_MINIMUM_HEIGHT, MIN_OFFSET_X,
};
use crate::host::{HostBounds, Layer};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size};

/// Layout values shared by all banners created after they are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDefaults {
    minimum_height: f32,
    content_margin_height: f32,
    default_offset_x: f32,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
            content_margin_height: DEFAULT_CONTENT_MARGIN_HEIGHT,
            default_offset_x: DEFAULT_OFFSET_X,
        }
    }
}

impl LayoutDefaults {
    #[must_use]
    pub fn minimum_height(&self) -> f32 {
        self.minimum_height
    }

    /// Vertical padding above and below the content.
    #[must_use]
    pub fn content_margin_height(&self) -> f32 {
        self.content_margin_height
    }

    /// Horizontal inset of the content from the host edges.
    #[must_use]
    pub fn default_offset_x(&self) -> f32 {
        self.default_offset_x
    }

    pub fn set_minimum_height(&mut self, height: f32) {
        self.minimum_height = height.clamp(MIN_MINIMUM_HEIGHT, MAX_MINIMUM_HEIGHT);
    }

    pub fn set_content_margin_height(&mut self, margin: f32) {
        self.content_margin_height =
            margin.clamp(MIN_CONTENT_MARGIN_HEIGHT, MAX_CONTENT_MARGIN_HEIGHT);
    }

    pub fn set_default_offset_x(&mut self, offset: f32) {
        self.default_offset_x = offset.clamp(MIN_OFFSET_X, MAX_OFFSET_X);
    }

    /// Width left for the message once insets, icon and anchor are placed.
    #[must_use]
    pub fn content_width(&self, host_width: f32, has_icon: bool, has_anchor: bool) -> f32 {
        let mut width = host_width - 2.0 * self.default_offset_x;
        if has_icon {
            width -= sizing::BANNER_ICON + spacing::SM;
        }
        if has_anchor {
            width -= sizing::BANNER_ANCHOR + spacing::SM;
        }
        width.max(1.0)
    }

    /// Banner height for content of the given height.
    #[must_use]
    pub fn banner_height(&self, content_height: f32) -> f32 {
        (content_height + 2.0 * self.content_margin_height).max(self.minimum_height)
    }
}

/// Frame of a fully presented banner.
///
/// `stack_offset` is the distance from the layer's edge taken up by the
/// banners registered earlier on the same host and position.
#[must_use]
pub fn resting_frame(
    bounds: &HostBounds,
    layer: Layer,
    position: Position,
    height: f32,
    stack_offset: f32,
) -> Rectangle {
    let y = match position {
        Position::Top => bounds.top_edge(layer) + stack_offset,
        Position::Bottom => bounds.bottom_edge(layer) - stack_offset - height,
    };
    Rectangle::new(
        Point::new(bounds.frame.x, y),
        Size::new(bounds.frame.width, height),
    )
}

/// Frame and opacity of a banner at the given visibility (0 hidden, 1 shown).
///
/// Hidden banners sit just outside their resting frame, towards the edge
/// they slide in from.
#[must_use]
pub fn animated_frame(rest: Rectangle, position: Position, visibility: f32) -> (Rectangle, f32) {
    let visibility = visibility.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - visibility).powi(3);
    let travel = rest.height * (1.0 - eased);
    let y = match position {
        Position::Top => rest.y - travel,
        Position::Bottom => rest.y + travel,
    };
    (Rectangle { y, ..rest }, eased)
}
