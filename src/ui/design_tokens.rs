// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the changelog viewer.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use changelog_viewer::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let dimmed = Color {
    a: opacity::CLOSING,
    ..palette::WHITE
};
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
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.06, 0.07, 0.10);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.17, 0.21);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.56, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.86, 0.9);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.95, 0.97);

    // Brand colors (violet scale, matches the gradient background)
    pub const PRIMARY_300: Color = Color::from_rgb(0.76, 0.68, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.49, 0.36, 0.93);
    pub const PRIMARY_700: Color = Color::from_rgb(0.33, 0.22, 0.7);

    // Semantic colors
    pub const ERROR_400: Color = Color::from_rgb(0.97, 0.44, 0.44);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.1;
    pub const BADGE: f32 = 0.2;
    /// Dropdown while it is closing.
    pub const CLOSING: f32 = 0.35;
    pub const SURFACE: f32 = 0.85;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_BUTTON: f32 = 36.0;
    pub const DROPDOWN_WIDTH: f32 = 112.0;
    /// Widest an article card grows before centering.
    pub const CONTENT_MAX_WIDTH: f32 = 896.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title in the header.
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Badges, dates, footer.
    pub const CAPTION: f32 = 12.0;

    /// Font size for a markdown heading of the given level (1-6).
    #[must_use]
    pub fn heading(level: u8) -> f32 {
        match level {
            1 => TITLE_LG,
            2 => TITLE_MD,
            3 => TITLE_SM,
            _ => BODY_LG,
        }
    }
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::CLOSING > 0.0 && opacity::CLOSING < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_SM > 0.0);
};
