// SPDX-License-Identifier: MPL-2.0
//! Leading icons and trailing anchor glyphs.
//!
//! Glyphs are SVG files under `assets/icons/`, embedded at compile time and
//! tinted at render time with the banner's asset color. Handles are created
//! once and cached.

use iced::widget::svg;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// Returns the cached handle of an embedded glyph.
fn glyph(file: &'static str) -> Option<svg::Handle> {
    static HANDLES: OnceLock<HashMap<String, svg::Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        IconAssets::iter()
            .filter_map(|name| {
                let asset = IconAssets::get(&name)?;
                Some((name.to_string(), svg::Handle::from_memory(asset.data)))
            })
            .collect()
    });
    handles.get(file).cloned()
}

/// Icon shown at the leading edge of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerIcon {
    Facebook,
    Gift,
    #[default]
    Info,
    Smiley,
    Twitter,
    Warning,
    /// Image file set with `custom_icon`.
    Custom,
    None,
}

impl BannerIcon {
    pub const ALL: [Self; 8] = [
        Self::Facebook,
        Self::Gift,
        Self::Info,
        Self::Smiley,
        Self::Twitter,
        Self::Warning,
        Self::Custom,
        Self::None,
    ];

    fn asset(self) -> Option<&'static str> {
        match self {
            Self::Facebook => Some("facebook.svg"),
            Self::Gift => Some("gift.svg"),
            Self::Info => Some("info.svg"),
            Self::Smiley => Some("smiley.svg"),
            Self::Twitter => Some("twitter.svg"),
            Self::Warning => Some("warning.svg"),
            Self::Custom | Self::None => None,
        }
    }

    /// Embedded glyph of a built-in icon.
    #[must_use]
    pub fn handle(self) -> Option<svg::Handle> {
        self.asset().and_then(glyph)
    }
}

impl std::fmt::Display for BannerIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Facebook => "Facebook",
            Self::Gift => "Gift",
            Self::Info => "Info",
            Self::Smiley => "Smiley",
            Self::Twitter => "Twitter",
            Self::Warning => "Warning",
            Self::Custom => "Custom",
            Self::None => "None",
        })
    }
}

/// What the leading slot of a banner actually renders.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSource {
    Glyph(svg::Handle),
    Image(PathBuf),
}

/// Resolves the leading icon. A custom icon without a file renders nothing.
#[must_use]
pub fn icon_source(icon: BannerIcon, custom_icon: Option<&PathBuf>) -> Option<IconSource> {
    match icon {
        BannerIcon::Custom => custom_icon.cloned().map(IconSource::Image),
        BannerIcon::None => None,
        built_in => built_in.handle().map(IconSource::Glyph),
    }
}

/// Decorative glyph at the trailing edge of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    Arrow,
    Close,
    None,
}

impl Anchor {
    pub const ALL: [Self; 3] = [Self::Arrow, Self::Close, Self::None];

    #[must_use]
    pub fn handle(self) -> Option<svg::Handle> {
        match self {
            Self::Arrow => glyph("arrow.svg"),
            Self::Close => glyph("close.svg"),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Arrow => "Arrow",
            Self::Close => "Close",
            Self::None => "None",
        })
    }
}
