// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering banners.
//!
//! A banner is a full-width card with a vertical gradient background and a
//! single row: `[icon] [message or custom content] [anchor]`. The overlay of
//! a host stacks one full-size layer per banner and moves each banner to its
//! animated frame with padding.

use super::icon::{icon_source, IconSource};
use super::manager::{Manager, Message};
use super::notification::Notification;
use super::style::Gradient;
use crate::host::{HostId, ScreenHierarchy};
use crate::ui::design_tokens::{opacity, shadow, sizing, spacing};
use iced::widget::image::{self, Image};
use iced::widget::svg::{self, Svg};
use iced::widget::{container, mouse_area, text, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Rectangle, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders one banner in `frame` at the given opacity.
    pub fn view(notification: &Notification, frame: Rectangle, alpha: f32) -> Element<'_, Message> {
        let layout = notification.layout();
        let asset_tint = notification.asset_tint();
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(source) = icon_source(notification.icon(), notification.custom_icon()) {
            row = row.push(Self::icon(source, asset_tint, alpha));
        }

        let content: Element<'_, Message> = match notification.custom_content() {
            Some(custom) => custom.view(notification.text_tint()),
            None => {
                let message = notification
                    .display_message()
                    .map(std::borrow::Cow::into_owned)
                    .unwrap_or_default();
                let tint = notification.text_tint();
                Text::new(message)
                    .size(notification.label_font_size())
                    .style(move |theme: &Theme| text::Style {
                        color: Some(tint.unwrap_or(theme.palette().text).scale_alpha(alpha)),
                    })
                    .into()
            }
        };
        row = row.push(Container::new(content).width(Length::Fill));

        if let Some(handle) = notification.anchor().handle() {
            row = row.push(glyph(handle, sizing::BANNER_ANCHOR, asset_tint, alpha));
        }

        let gradient = notification.gradient();
        let dimmed = notification.was_tapped();
        let banner = Container::new(row)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .padding(Padding {
                top: layout.content_margin_height(),
                right: layout.default_offset_x(),
                bottom: layout.content_margin_height(),
                left: layout.default_offset_x(),
            })
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| banner_style(gradient, alpha, dimmed));

        mouse_area(banner)
            .on_press(Message::Tapped(notification.id()))
            .into()
    }

    /// Renders every banner of `host`, positioned relative to the host frame.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        screens: &dyn ScreenHierarchy,
        host: HostId,
        now: Instant,
    ) -> Element<'a, Message> {
        let Some(bounds) = screens.bounds(host) else {
            return Space::new().into();
        };

        let layers: Vec<Element<'a, Message>> = manager
            .placements(screens, host, now)
            .into_iter()
            .filter_map(|placement| {
                let notification = manager.get(placement.id)?;
                let banner = Self::view(notification, placement.frame, placement.opacity);
                Some(
                    Container::new(banner)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .padding(layer_padding(bounds.frame, placement.frame))
                        .into(),
                )
            })
            .collect();

        if layers.is_empty() {
            Space::new().into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    fn icon<'a>(source: IconSource, tint: Option<Color>, alpha: f32) -> Element<'a, Message> {
        match source {
            IconSource::Glyph(handle) => glyph(handle, sizing::BANNER_ICON, tint, alpha),
            IconSource::Image(path) => Image::new(image::Handle::from_path(path))
                .width(Length::Fixed(sizing::BANNER_ICON))
                .height(Length::Fixed(sizing::BANNER_ICON))
                .opacity(alpha)
                .into(),
        }
    }
}

fn glyph<'a>(handle: svg::Handle, size: f32, tint: Option<Color>, alpha: f32) -> Element<'a, Message> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .opacity(alpha)
        .style(move |_theme: &Theme, _status| svg::Style { color: tint })
        .into()
}

/// Offsets a banner inside a layer covering the host. Parts above the host
/// origin are clamped; they are faded out at that point anyway.
fn layer_padding(host: Rectangle, frame: Rectangle) -> Padding {
    Padding {
        top: (frame.y - host.y).max(0.0),
        left: (frame.x - host.x).max(0.0),
        ..Padding::ZERO
    }
}

/// Style function for the banner container.
fn banner_style(gradient: Gradient, alpha: f32, dimmed: bool) -> container::Style {
    let alpha = if dimmed { alpha * opacity::HIGHLIGHT } else { alpha };
    let mut banner_shadow = shadow::BANNER;
    banner_shadow.color = banner_shadow.color.scale_alpha(alpha);

    container::Style {
        background: Some(gradient.with_alpha(alpha).to_background()),
        shadow: banner_shadow,
        ..Default::default()
    }
}
