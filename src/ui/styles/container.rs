// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::button::faded;
use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Full-window backdrop.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header and footer bars.
pub fn bar(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.header)),
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Glass card holding one changelog entry or the error message.
pub fn card(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.card)),
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Pill behind the version label.
pub fn badge(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.badge_background)),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Language dropdown panel, faded by `fade` while closing.
pub fn dropdown(colors: ColorScheme, fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::OPAQUE,
                ..colors.card
            },
            fade,
        ))),
        border: Border {
            color: faded(colors.divider, fade),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2 * fade),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Fenced code inside an entry body.
pub fn code_block(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..colors.text_primary
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tinted panel behind a block quote.
pub fn quote(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.badge_background)),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// One-pixel horizontal rule.
pub fn divider(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.divider)),
        ..Default::default()
    }
}
