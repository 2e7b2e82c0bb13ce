// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Styles take the active [`ColorScheme`] rather than reading the `iced`
//! palette, so both themes stay on the app's brand colors.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round glass button used in the header (language, theme).
pub fn header_icon(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::BADGE,
            button::Status::Pressed => opacity::BADGE * 1.5,
            _ => opacity::SUBTLE,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.text_primary
            })),
            text_color: colors.text_primary,
            border: Border {
                color: colors.divider,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..button::Style::default()
        }
    }
}

/// One entry in the language dropdown.
///
/// `fade` scales every alpha channel and is `opacity::OPAQUE` except while
/// the menu is closing.
pub fn language_option(
    colors: ColorScheme,
    selected: bool,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (selected, status) {
            (true, _) => Some(colors.badge_background),
            (false, button::Status::Hovered) => Some(Color {
                a: opacity::SUBTLE,
                ..colors.text_primary
            }),
            _ => None,
        };
        let text_color = if selected {
            colors.brand_primary
        } else {
            colors.text_primary
        };

        button::Style {
            background: background.map(|c| Background::Color(faded(c, fade))),
            text_color: faded(text_color, fade),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub(crate) fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}
