// SPDX-License-Identifier: MPL-2.0
//! Banner content: the built-in text label and the custom content capability.

use super::manager::Message;
use crate::config::{DEFAULT_LABEL_FONT_SIZE, ELLIPSIS};
use crate::ui::design_tokens::typography;
use iced::widget::{text, Text};
use iced::{Color, Element, Size};
use std::borrow::Cow;

/// Anything a banner can lay out in place of its text label.
///
/// The banner only asks for the size the content wants at a given width,
/// renders it, and tells it when the user presses the banner.
pub trait CustomContent {
    /// Size the content needs when given `available_width`.
    fn desired_size(&self, available_width: f32) -> Size;

    /// Renders the content. `text_color` is the banner's resolved text tint.
    fn view(&self, text_color: Option<Color>) -> Element<'_, Message>;

    /// Called when the banner is pressed.
    fn set_highlighted(&mut self, _highlighted: bool) {}
}

/// Returns `message` cut to `max_length` characters plus an ellipsis.
#[must_use]
pub fn truncate(message: &str, max_length: usize) -> Cow<'_, str> {
    match message.char_indices().nth(max_length) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &message[..cut])),
        None => Cow::Borrowed(message),
    }
}

/// Plain text content, used for the notification message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    text: String,
    font_size: f32,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_LABEL_FONT_SIZE,
        }
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn line_height(&self) -> f32 {
        self.font_size * typography::LINE_HEIGHT_RATIO
    }

    /// Number of wrapped lines at the given width.
    fn line_count(&self, available_width: f32) -> usize {
        let glyph_width = self.font_size * typography::GLYPH_WIDTH_RATIO;
        let per_line = ((available_width / glyph_width).floor() as usize).max(1);
        self.text
            .split('\n')
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum()
    }
}

impl CustomContent for TextLabel {
    fn desired_size(&self, available_width: f32) -> Size {
        let lines = self.line_count(available_width);
        let glyph_width = self.font_size * typography::GLYPH_WIDTH_RATIO;
        let longest = self
            .text
            .split('\n')
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = (longest as f32 * glyph_width).min(available_width);
        Size::new(width, lines as f32 * self.line_height())
    }

    fn view(&self, text_color: Option<Color>) -> Element<'_, Message> {
        Text::new(self.text.as_str())
            .size(self.font_size)
            .style(move |theme: &iced::Theme| text::Style {
                color: text_color.or(Some(theme.palette().text)),
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn short_message_is_unchanged() {
        assert_eq!(truncate("Saved", 150), "Saved");
        assert!(matches!(truncate("Saved", 5), Cow::Borrowed(_)));
    }

    #[test]
    fn long_message_is_cut_with_ellipsis() {
        assert_eq!(truncate("Hello, world", 5), "Hello...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate("héhé ça va", 4), "héhé...");
    }

    #[test]
    fn zero_length_leaves_only_ellipsis() {
        assert_eq!(truncate("anything", 0), "...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn label_wraps_to_available_width() {
        let label = TextLabel::new("a".repeat(40)).font_size(10.0);
        // 5.5 px per glyph: 115 px holds 20 glyphs, so 40 glyphs need 2 lines.
        let size = label.desired_size(115.0);
        assert_abs_diff_eq!(size.height, 26.0, epsilon = 1e-4);
        assert_abs_diff_eq!(size.width, 115.0);
    }

    #[test]
    fn explicit_newlines_start_new_lines() {
        let label = TextLabel::new("one\ntwo\nthree").font_size(10.0);
        assert_abs_diff_eq!(label.desired_size(500.0).height, 39.0, epsilon = 1e-4);
    }

    #[test]
    fn empty_label_still_has_one_line() {
        let label = TextLabel::new("").font_size(10.0);
        assert_abs_diff_eq!(label.desired_size(100.0).height, 13.0, epsilon = 1e-4);
    }
}
