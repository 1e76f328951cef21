// SPDX-License-Identifier: MPL-2.0
//! Demo form: every display parameter of a banner, plus the layout defaults.
//!
//! The form only edits its own state. Changes the application must act on
//! (layout defaults, default delay, theme) are reported as [`Event`]s.

use crate::config::{
    Config, MAX_CONTENT_MARGIN_HEIGHT, MAX_DELAY, MAX_MINIMUM_HEIGHT, MIN_CONTENT_MARGIN_HEIGHT,
    MIN_MINIMUM_HEIGHT,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{
    Anchor, BannerColor, BannerIcon, ContentColor, LayoutDefaults, Notification, Position,
};
use crate::ui::theming::ThemeMode;
use iced::widget::{pick_list, slider, text, text_input, toggler, Column, Row, Text};
use iced::{Alignment, Color, Element, Length};
use std::time::Duration;

/// Gradient used when "Custom gradient" is on.
const CUSTOM_TOP: Color = Color::from_rgb(0.180, 0.741, 0.620);
const CUSTOM_BOTTOM: Color = Color::from_rgb(0.102, 0.561, 0.471);

/// Manual text/asset color used by [`ContentColor::Manual`].
const MANUAL_COLOR: Color = Color::from_rgb(0.996, 0.945, 0.800);

const MIN_MESSAGE_LENGTH: u16 = 10;
const MAX_MESSAGE_LENGTH: u16 = 300;

/// Canned messages of increasing length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageSample {
    #[default]
    Short,
    Medium,
    Long,
}

impl MessageSample {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Short => "Message sent.",
            Self::Medium => {
                "Your profile picture was updated and is now visible to your friends."
            }
            Self::Long => {
                "Your weekly backup finished with warnings: three files could not be read \
                 because they were open in another application, and two folders were skipped \
                 since they are excluded by your sync rules. Open the report for details."
            }
        }
    }
}

impl std::fmt::Display for MessageSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        })
    }
}

/// Where the demo anchors banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextChoice {
    #[default]
    TopMost,
    Inbox,
    Settings,
    BelowStatusBar,
    AboveStatusBar,
}

impl ContextChoice {
    pub const ALL: [Self; 5] = [
        Self::TopMost,
        Self::Inbox,
        Self::Settings,
        Self::BelowStatusBar,
        Self::AboveStatusBar,
    ];

    /// Whether banners land on the root window rather than a screen.
    #[must_use]
    pub fn is_status_bar(self) -> bool {
        matches!(self, Self::BelowStatusBar | Self::AboveStatusBar)
    }
}

impl std::fmt::Display for ContextChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TopMost => "Top-most screen",
            Self::Inbox => "Inbox screen",
            Self::Settings => "Settings screen",
            Self::BelowStatusBar => "Below status bar",
            Self::AboveStatusBar => "Above status bar",
        })
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub sample: MessageSample,
    pub icon: BannerIcon,
    pub anchor: Anchor,
    pub position: Position,
    pub color: BannerColor,
    pub custom_gradient: bool,
    pub asset_color: ContentColor,
    pub text_color: ContentColor,
    pub context: ContextChoice,
    pub delay_secs: f32,
    pub vibrate: bool,
    pub sound: String,
    pub dismiss_on_tap: bool,
    pub minimum_height: f32,
    pub content_margin: f32,
    pub message_max_length: u16,
    pub theme_mode: ThemeMode,
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl State {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let layout = config.layout_defaults();
        Self {
            sample: MessageSample::default(),
            icon: BannerIcon::default(),
            anchor: Anchor::default(),
            position: Position::default(),
            color: BannerColor::default(),
            custom_gradient: false,
            asset_color: ContentColor::default(),
            text_color: ContentColor::default(),
            context: ContextChoice::default(),
            delay_secs: config.default_delay().as_secs_f32().min(MAX_DELAY.as_secs_f32()),
            vibrate: false,
            sound: String::new(),
            dismiss_on_tap: true,
            minimum_height: layout.minimum_height(),
            content_margin: layout.content_margin_height(),
            message_max_length: u16::try_from(config.message_max_length())
                .unwrap_or(MAX_MESSAGE_LENGTH)
                .clamp(MIN_MESSAGE_LENGTH, MAX_MESSAGE_LENGTH),
            theme_mode: ThemeMode::default(),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs_f32(self.delay_secs.max(0.0))
    }

    /// Layout defaults edited by the form, on top of `base`.
    #[must_use]
    pub fn layout(&self, base: &LayoutDefaults) -> LayoutDefaults {
        let mut layout = *base;
        layout.set_minimum_height(self.minimum_height);
        layout.set_content_margin_height(self.content_margin);
        layout
    }

    /// Applies every display parameter of the form to `notification`.
    #[must_use]
    pub fn configure(&self, notification: Notification) -> Notification {
        let (top, bottom) = if self.custom_gradient {
            (Some(CUSTOM_TOP), Some(CUSTOM_BOTTOM))
        } else {
            (None, None)
        };
        let sound = self.sound.trim();

        let mut notification = notification
            .with_icon(self.icon)
            .with_anchor(self.anchor)
            .with_position(self.position)
            .with_color(self.color)
            .with_custom_colors(top, bottom)
            .with_asset_color(self.asset_color)
            .with_text_color(self.text_color)
            .with_manual_colors(Some(MANUAL_COLOR), Some(MANUAL_COLOR))
            .with_vibrate(self.vibrate)
            .with_delay(self.delay())
            .with_dismiss_on_tap(self.dismiss_on_tap)
            .with_message_max_length(usize::from(self.message_max_length));
        if !sound.is_empty() {
            notification = notification.with_sound(sound);
        }
        notification
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SampleSelected(MessageSample),
    IconSelected(BannerIcon),
    AnchorSelected(Anchor),
    PositionSelected(Position),
    ColorSelected(BannerColor),
    CustomGradientToggled(bool),
    AssetColorSelected(ContentColor),
    TextColorSelected(ContentColor),
    ContextSelected(ContextChoice),
    DelayChanged(f32),
    VibrateToggled(bool),
    SoundChanged(String),
    DismissOnTapToggled(bool),
    MinimumHeightChanged(f32),
    ContentMarginChanged(f32),
    MessageMaxLengthChanged(u16),
    ThemeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LayoutChanged,
    DelayChanged(Duration),
    MessageMaxLengthChanged(usize),
    ThemeChanged(ThemeMode),
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SampleSelected(sample) => state.sample = sample,
        Message::IconSelected(icon) => state.icon = icon,
        Message::AnchorSelected(anchor) => state.anchor = anchor,
        Message::PositionSelected(position) => state.position = position,
        Message::ColorSelected(color) => state.color = color,
        Message::CustomGradientToggled(enabled) => state.custom_gradient = enabled,
        Message::AssetColorSelected(color) => state.asset_color = color,
        Message::TextColorSelected(color) => state.text_color = color,
        Message::ContextSelected(context) => state.context = context,
        Message::DelayChanged(secs) => {
            state.delay_secs = secs.clamp(0.0, MAX_DELAY.as_secs_f32());
            return Event::DelayChanged(state.delay());
        }
        Message::VibrateToggled(vibrate) => state.vibrate = vibrate,
        Message::SoundChanged(sound) => state.sound = sound,
        Message::DismissOnTapToggled(dismiss) => state.dismiss_on_tap = dismiss,
        Message::MinimumHeightChanged(height) => {
            state.minimum_height = height.clamp(MIN_MINIMUM_HEIGHT, MAX_MINIMUM_HEIGHT);
            return Event::LayoutChanged;
        }
        Message::ContentMarginChanged(margin) => {
            state.content_margin = margin.clamp(MIN_CONTENT_MARGIN_HEIGHT, MAX_CONTENT_MARGIN_HEIGHT);
            return Event::LayoutChanged;
        }
        Message::MessageMaxLengthChanged(length) => {
            state.message_max_length = length.clamp(MIN_MESSAGE_LENGTH, MAX_MESSAGE_LENGTH);
            return Event::MessageMaxLengthChanged(usize::from(state.message_max_length));
        }
        Message::ThemeSelected(mode) => {
            state.theme_mode = mode;
            return Event::ThemeChanged(mode);
        }
    }
    Event::None
}

/// Render the form.
pub fn view(state: &State) -> Element<'_, Message> {
    let delay_label = if state.delay_secs <= 0.0 {
        "Delay: never dismiss".to_owned()
    } else {
        format!("Delay: {:.1} s", state.delay_secs)
    };

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(section("Banner"))
        .push(labeled(
            "Message",
            pick_list(&MessageSample::ALL[..], Some(state.sample), Message::SampleSelected),
        ))
        .push(labeled(
            "Icon",
            pick_list(&BannerIcon::ALL[..], Some(state.icon), Message::IconSelected),
        ))
        .push(labeled(
            "Anchor",
            pick_list(&Anchor::ALL[..], Some(state.anchor), Message::AnchorSelected),
        ))
        .push(labeled(
            "Position",
            pick_list(
                &[Position::Top, Position::Bottom][..],
                Some(state.position),
                Message::PositionSelected,
            ),
        ))
        .push(labeled(
            "Color",
            pick_list(&BannerColor::ALL[..], Some(state.color), Message::ColorSelected),
        ))
        .push(
            toggler(state.custom_gradient)
                .label("Custom gradient")
                .on_toggle(Message::CustomGradientToggled),
        )
        .push(labeled(
            "Asset color",
            pick_list(&ContentColor::ALL[..], Some(state.asset_color), Message::AssetColorSelected),
        ))
        .push(labeled(
            "Text color",
            pick_list(&ContentColor::ALL[..], Some(state.text_color), Message::TextColorSelected),
        ))
        .push(labeled(
            "Context",
            pick_list(&ContextChoice::ALL[..], Some(state.context), Message::ContextSelected),
        ))
        .push(Text::new(delay_label).size(typography::CAPTION))
        .push(
            slider(0.0..=MAX_DELAY.as_secs_f32(), state.delay_secs, Message::DelayChanged)
                .step(0.5),
        )
        .push(
            toggler(state.vibrate)
                .label("Vibrate")
                .on_toggle(Message::VibrateToggled),
        )
        .push(
            toggler(state.dismiss_on_tap)
                .label("Dismiss on tap")
                .on_toggle(Message::DismissOnTapToggled),
        )
        .push(labeled(
            "Sound",
            text_input("file name, e.g. chime.wav", &state.sound).on_input(Message::SoundChanged),
        ))
        .push(section("Defaults"))
        .push(Text::new(format!("Minimum height: {:.0}", state.minimum_height)).size(typography::CAPTION))
        .push(
            slider(
                MIN_MINIMUM_HEIGHT..=MAX_MINIMUM_HEIGHT,
                state.minimum_height,
                Message::MinimumHeightChanged,
            )
            .step(1.0),
        )
        .push(Text::new(format!("Content margin: {:.0}", state.content_margin)).size(typography::CAPTION))
        .push(
            slider(
                MIN_CONTENT_MARGIN_HEIGHT..=MAX_CONTENT_MARGIN_HEIGHT,
                state.content_margin,
                Message::ContentMarginChanged,
            )
            .step(1.0),
        )
        .push(
            Text::new(format!("Max message length: {}", state.message_max_length))
                .size(typography::CAPTION),
        )
        .push(
            slider(
                MIN_MESSAGE_LENGTH..=MAX_MESSAGE_LENGTH,
                state.message_max_length,
                Message::MessageMaxLengthChanged,
            )
            .step(5u16),
        )
        .push(labeled(
            "Theme",
            pick_list(&ThemeMode::ALL[..], Some(state.theme_mode), Message::ThemeSelected),
        ))
        .into()
}

fn section(title: &str) -> Text<'_> {
    Text::new(title).size(typography::TITLE_SM)
}

fn labeled<'a>(label: &'a str, control: impl Into<Element<'a, Message>>) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(text(label).size(typography::BODY).width(Length::FillPortion(2)))
        .push(iced::widget::container(control).width(Length::FillPortion(3)))
}
