// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`ThemeMode`] is the user-facing preference; [`AppTheme`] is what the
//! rendering layer reads to pick colors and the `iced::Theme`.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub background: Color,
    pub card: Color,
    pub header: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub badge_background: Color,

    pub error: Color,
    pub divider: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::GRAY_100,
            card: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            header: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_700,
            badge_background: Color {
                a: opacity::BADGE,
                ..palette::PRIMARY_500
            },

            error: palette::ERROR_500,
            divider: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            card: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_800
            },
            header: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_300,
            badge_background: Color {
                a: opacity::BADGE,
                ..palette::PRIMARY_300
            },

            error: palette::ERROR_400,
            divider: Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark_flag(!self.is_dark())
    }
}

/// Theme configuration read by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        };

        Self { colors, mode }
    }

    /// Built-in iced theme matching the mode, for default widget styling.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        match self.mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}
