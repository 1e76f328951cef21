// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate color schemes and design token coherence.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use iced::Color;
    use iced_banner::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_banner::ui::notifications::{BannerColor, ContentColor, Gradient};
    use iced_banner::ui::theming::ThemeMode;

    #[test]
    #[allow(deprecated)]
    fn legacy_aliases_render_like_their_replacements() {
        assert_eq!(BannerColor::BLUE, BannerColor::LightBlue);
        assert_eq!(BannerColor::GREY, BannerColor::DarkBlue);
        assert_eq!(BannerColor::GREY.gradient(), BannerColor::DarkBlue.gradient());
    }

    #[test]
    fn every_scheme_has_a_distinct_gradient() {
        let gradients: Vec<Gradient> = BannerColor::ALL.iter().map(|c| c.gradient()).collect();
        for (i, a) in gradients.iter().enumerate() {
            for b in &gradients[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn custom_colors_need_both_stops() {
        let top = Color::from_rgb(0.1, 0.2, 0.3);
        let bottom = Color::from_rgb(0.3, 0.2, 0.1);

        let partial = Gradient::resolve(BannerColor::Red, Some(top), None);
        assert_eq!(partial, BannerColor::Red.gradient());

        let custom = Gradient::resolve(BannerColor::Red, Some(top), Some(bottom));
        assert_eq!(custom, Gradient { top, bottom });
    }

    #[test]
    fn gradient_alpha_scales_both_stops() {
        let gradient = BannerColor::Yellow.gradient().with_alpha(opacity::HIGHLIGHT);
        assert_abs_diff_eq!(gradient.top.a, 0.85, epsilon = 1e-6);
        assert_abs_diff_eq!(gradient.bottom.a, 0.85, epsilon = 1e-6);
    }

    #[test]
    fn content_colors_resolve_to_palette() {
        assert_eq!(ContentColor::Light.resolve(None), Some(palette::CONTENT_LIGHT));
        assert_eq!(ContentColor::Dark.resolve(None), Some(palette::CONTENT_DARK));
        assert_eq!(ContentColor::Manual.resolve(None), None);
        assert_eq!(
            ContentColor::Manual.resolve(Some(palette::RED_TOP)),
            Some(palette::RED_TOP)
        );
    }

    #[test]
    fn spacing_scale_is_ordered() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }

    #[test]
    fn device_bars_fit_inside_banner_minimum() {
        assert!(sizing::BANNER_ICON < sizing::NAV_BAR_HEIGHT);
        assert!(sizing::BANNER_ANCHOR < sizing::BANNER_ICON);
        assert!(sizing::STATUS_BAR_HEIGHT < sizing::NAV_BAR_HEIGHT);
    }

    #[test]
    fn explicit_theme_modes_are_fixed() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
