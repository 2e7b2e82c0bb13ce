// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the active scheme so they stand out from the header glass.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

pub fn tooltip_container(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (bg_color, text_color) = match mode {
            ThemeMode::Dark => (palette::GRAY_100, palette::GRAY_900),
            ThemeMode::Light => (palette::GRAY_900, palette::GRAY_100),
        };

        container::Style {
            background: Some(Background::Color(bg_color)),
            border: Border {
                radius: radius::SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            text_color: Some(text_color),
            ..Default::default()
        }
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    mode: ThemeMode,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container(mode));

    tooltip(content, tip_container, position).gap(spacing::XS)
}
