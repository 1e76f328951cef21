// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used by banners and by the demo,
following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and the banner gradient pairs
- **Opacity**: Press feedback levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{opacity, palette, spacing};

let pressed_tint = palette::CONTENT_LIGHT.scale_alpha(opacity::HIGHLIGHT);

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Banner content tints
    pub const CONTENT_LIGHT: Color = Color::WHITE;
    pub const CONTENT_DARK: Color = Color::from_rgb(0.2, 0.2, 0.2);

    // Banner gradients (top, bottom)
    pub const YELLOW_TOP: Color = Color::from_rgb(0.996, 0.859, 0.322);
    pub const YELLOW_BOTTOM: Color = Color::from_rgb(0.988, 0.761, 0.157);
    pub const RED_TOP: Color = Color::from_rgb(0.906, 0.302, 0.259);
    pub const RED_BOTTOM: Color = Color::from_rgb(0.780, 0.180, 0.149);
    pub const LIGHT_BLUE_TOP: Color = Color::from_rgb(0.443, 0.749, 0.937);
    pub const LIGHT_BLUE_BOTTOM: Color = Color::from_rgb(0.267, 0.616, 0.855);
    pub const DARK_BLUE_TOP: Color = Color::from_rgb(0.251, 0.341, 0.561);
    pub const DARK_BLUE_BOTTOM: Color = Color::from_rgb(0.165, 0.243, 0.447);
    pub const PURPLE_TOP: Color = Color::from_rgb(0.620, 0.404, 0.757);
    pub const PURPLE_BOTTOM: Color = Color::from_rgb(0.494, 0.278, 0.651);
    pub const ORANGE_TOP: Color = Color::from_rgb(0.976, 0.612, 0.251);
    pub const ORANGE_BOTTOM: Color = Color::from_rgb(0.937, 0.482, 0.102);

    // Demo chrome
    pub const STATUS_BAR: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const NAV_BAR: Color = Color::from_rgb(0.96, 0.96, 0.97);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Banner opacity while the user is pressing it.
    pub const HIGHLIGHT: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Leading icon of a banner.
    pub const BANNER_ICON: f32 = 24.0;

    /// Trailing anchor glyph of a banner.
    pub const BANNER_ANCHOR: f32 = 14.0;

    /// Simulated chrome in the demo.
    pub const STATUS_BAR_HEIGHT: f32 = 24.0;
    pub const NAV_BAR_HEIGHT: f32 = 44.0;
    pub const TAB_BAR_HEIGHT: f32 = 49.0;

    pub const FORM_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Small title - Section headers
    pub const TITLE_SM: f32 = 17.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Small info, completion log
    pub const CAPTION: f32 = 12.0;

    /// Average glyph advance as a fraction of the font size.
    pub const GLYPH_WIDTH_RATIO: f32 = 0.55;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT_RATIO: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    /// Soft shadow cast by a banner onto the screen beneath it.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.35,
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::HIGHLIGHT > 0.0 && opacity::HIGHLIGHT < 1.0);

    assert!(sizing::BANNER_ICON > sizing::BANNER_ANCHOR);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
