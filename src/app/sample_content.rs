// SPDX-License-Identifier: MPL-2.0
//! Custom banner content used by the "Show custom content" button.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{CustomContent, NotificationMessage};
use iced::widget::{text, Column, Text};
use iced::{Color, Element, Font, Size, Theme};

/// A bold title above a one-line caption.
#[derive(Debug, Clone, PartialEq)]
pub struct TitledContent {
    title: String,
    caption: String,
    highlighted: bool,
}

impl TitledContent {
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
            highlighted: false,
        }
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

impl CustomContent for TitledContent {
    fn desired_size(&self, available_width: f32) -> Size {
        let height = (typography::TITLE_SM + typography::CAPTION) * typography::LINE_HEIGHT_RATIO
            + spacing::XXS;
        Size::new(available_width, height)
    }

    fn view(&self, text_color: Option<Color>) -> Element<'_, NotificationMessage> {
        let color = move |theme: &Theme| text::Style {
            color: Some(text_color.unwrap_or(theme.palette().text)),
        };
        let title = if self.is_highlighted() {
            format!("{} (opened)", self.title)
        } else {
            self.title.clone()
        };

        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: iced::font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(color),
            )
            .push(Text::new(self.caption.as_str()).size(typography::CAPTION).style(color))
            .into()
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
