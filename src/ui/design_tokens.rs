// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the library's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and the four severity scales
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_kit::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Info (blue scale)
    pub const INFO_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
    pub const INFO_200: Color = Color::from_rgb(0.749, 0.859, 0.996);
    pub const INFO_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const INFO_900: Color = Color::from_rgb(0.118, 0.227, 0.541);

    // Success (green scale)
    pub const SUCCESS_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const SUCCESS_200: Color = Color::from_rgb(0.733, 0.969, 0.816);
    pub const SUCCESS_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const SUCCESS_900: Color = Color::from_rgb(0.078, 0.325, 0.176);

    // Warning (yellow scale)
    pub const WARNING_50: Color = Color::from_rgb(0.996, 0.988, 0.910);
    pub const WARNING_200: Color = Color::from_rgb(0.996, 0.941, 0.541);
    pub const WARNING_600: Color = Color::from_rgb(0.792, 0.541, 0.016);
    pub const WARNING_900: Color = Color::from_rgb(0.443, 0.247, 0.071);

    // Error (red scale)
    pub const ERROR_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const ERROR_200: Color = Color::from_rgb(0.996, 0.792, 0.792);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const ERROR_900: Color = Color::from_rgb(0.498, 0.114, 0.114);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover wash on light surfaces (close buttons, menu rows).
    pub const HOVER_WASH: f32 = 0.05;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Sidebar backdrop.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Component widths
    pub const TOAST_MIN_WIDTH: f32 = 320.0;
    pub const TOAST_MAX_WIDTH: f32 = 448.0;
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading (gallery welcome title).
    pub const TITLE_LG: f32 = 30.0;

    /// Panel heading (sidebar header).
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - labels, toast text, menu rows
    pub const BODY: f32 = 14.0;

    /// Caption - helper and error text under inputs
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - inputs, toast outline, panel separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - focus ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 15.0,
    };

    pub const XL: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
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

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_MIN_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_scales_darken_towards_text() {
        for (surface, text) in [
            (palette::INFO_50, palette::INFO_900),
            (palette::SUCCESS_50, palette::SUCCESS_900),
            (palette::WARNING_50, palette::WARNING_900),
            (palette::ERROR_50, palette::ERROR_900),
        ] {
            assert!(surface.r + surface.g + surface.b > text.r + text.g + text.b);
        }
    }
}
