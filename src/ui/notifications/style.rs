// SPDX-License-Identifier: MPL-2.0
//! Banner color schemes.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Predefined background gradient of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerColor {
    #[default]
    Yellow,
    Red,
    #[serde(alias = "blue")]
    LightBlue,
    #[serde(alias = "grey", alias = "gray")]
    DarkBlue,
    Purple,
    Orange,
}

impl BannerColor {
    /// Legacy name of [`BannerColor::LightBlue`].
    #[deprecated(note = "use `BannerColor::LightBlue`")]
    pub const BLUE: Self = Self::LightBlue;

    /// Legacy grey scheme, now rendered with the dark blue gradient.
    ///
    /// Grey was the last legacy scheme and never shared a gradient with
    /// any other one, so there is no earlier scheme to fall back to. Dark
    /// blue is used because it is the most muted of the remaining
    /// gradients. Settings files that say `grey` or `gray` load as
    /// [`BannerColor::DarkBlue`] too.
    #[deprecated(note = "use `BannerColor::DarkBlue`")]
    pub const GREY: Self = Self::DarkBlue;

    pub const ALL: [Self; 6] = [
        Self::Yellow,
        Self::Red,
        Self::LightBlue,
        Self::DarkBlue,
        Self::Purple,
        Self::Orange,
    ];

    /// Top and bottom colors of the background gradient.
    #[must_use]
    pub fn gradient(self) -> Gradient {
        let (top, bottom) = match self {
            Self::Yellow => (palette::YELLOW_TOP, palette::YELLOW_BOTTOM),
            Self::Red => (palette::RED_TOP, palette::RED_BOTTOM),
            Self::LightBlue => (palette::LIGHT_BLUE_TOP, palette::LIGHT_BLUE_BOTTOM),
            Self::DarkBlue => (palette::DARK_BLUE_TOP, palette::DARK_BLUE_BOTTOM),
            Self::Purple => (palette::PURPLE_TOP, palette::PURPLE_BOTTOM),
            Self::Orange => (palette::ORANGE_TOP, palette::ORANGE_BOTTOM),
        };
        Gradient { top, bottom }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::LightBlue => "Light blue",
            Self::DarkBlue => "Dark blue",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
        }
    }
}

impl std::fmt::Display for BannerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Vertical two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top: Color,
    pub bottom: Color,
}

impl Gradient {
    /// Picks the custom pair when both colors are set, the scheme otherwise.
    #[must_use]
    pub fn resolve(scheme: BannerColor, custom_top: Option<Color>, custom_bottom: Option<Color>) -> Self {
        match (custom_top, custom_bottom) {
            (Some(top), Some(bottom)) => Self { top, bottom },
            _ => scheme.gradient(),
        }
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            top: self.top.scale_alpha(alpha),
            bottom: self.bottom.scale_alpha(alpha),
        }
    }

    /// Converts to an iced background, top color first.
    #[must_use]
    pub fn to_background(self) -> iced::Background {
        let linear = iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
            .add_stop(0.0, self.top)
            .add_stop(1.0, self.bottom);
        iced::Background::Gradient(iced::Gradient::Linear(linear))
    }
}

/// Tint applied to the icon/anchor glyphs or to the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentColor {
    #[default]
    Light,
    Dark,
    /// Uses the color explicitly set on the notification.
    Manual,
}

impl ContentColor {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Manual];

    /// Resolves the tint. `Manual` yields the explicit color, if any.
    #[must_use]
    pub fn resolve(self, manual: Option<Color>) -> Option<Color> {
        match self {
            Self::Light => Some(palette::CONTENT_LIGHT),
            Self::Dark => Some(palette::CONTENT_DARK),
            Self::Manual => manual,
        }
    }
}

impl std::fmt::Display for ContentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Manual => "Manual",
        })
    }
}
