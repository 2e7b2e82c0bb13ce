// SPDX-License-Identifier: MPL-2.0
//! Header bar: title, language switcher and theme toggle.
//!
//! The language dropdown hangs below the bar whenever the menu is visible
//! (`Open` or `Closing`). While closing it is drawn faded and its options
//! stop emitting messages.

use crate::controller::LanguageMenu;
use crate::i18n::fluent::TextBundle;
use crate::i18n::Language;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub text: &'a TextBundle,
    pub language: Language,
    pub theme: ThemeMode,
    pub menu: &'a LanguageMenu,
    pub colors: ColorScheme,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
    ToggleMenu,
    SelectLanguage(Language),
}

const GLOBE: &str = "🌐";
const SUN: &str = "☀";
const MOON: &str = "☾";

/// Glyph on the theme button: a sun while dark (switch to light), a moon
/// while light.
#[must_use]
pub fn theme_glyph(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        SUN
    } else {
        MOON
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu.is_visible() {
        content = content.push(
            Container::new(build_dropdown(&ctx))
                .width(Length::Fill)
                .padding([0.0, spacing::MD])
                .align_x(Horizontal::Right),
        );
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.text.title.as_str())
                .size(typography::TITLE_LG)
                .color(ctx.colors.text_primary),
        )
        .push(
            Text::new(ctx.text.subtitle.as_str())
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );

    let language_button = styles::tooltip::styled(
        icon_button(GLOBE, Message::ToggleMenu, ctx.colors),
        ctx.text.language_toggle_label.as_str(),
        ctx.theme,
        tooltip::Position::Bottom,
    );

    let theme_button = styles::tooltip::styled(
        icon_button(theme_glyph(ctx.theme), Message::ToggleTheme, ctx.colors),
        ctx.text.theme_toggle_label.as_str(),
        ctx.theme,
        tooltip::Position::Bottom,
    );

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::MD, spacing::MD])
        .align_y(Vertical::Center)
        .push(Container::new(titles).width(Length::Fill))
        .push(language_button)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar(ctx.colors))
        .into()
}

fn icon_button<'a>(glyph: &'a str, message: Message, colors: ColorScheme) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::ICON_BUTTON)
    .height(sizing::ICON_BUTTON)
    .padding(0)
    .on_press(message)
    .style(styles::button::header_icon(colors))
    .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let interactive = ctx.menu.is_interactive();
    let fade = if interactive {
        opacity::OPAQUE
    } else {
        opacity::CLOSING
    };

    let options = Language::ALL.iter().fold(
        Column::new().spacing(spacing::XXS),
        |col, &language| {
            let selected = language == ctx.language;
            let item = button(Text::new(language.native_name()).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::language_option(ctx.colors, selected, fade));
            let item = if interactive {
                item.on_press(Message::SelectLanguage(language))
            } else {
                item
            };
            col.push(item)
        },
    );

    Container::new(options)
        .width(sizing::DROPDOWN_WIDTH)
        .padding(spacing::XXS)
        .style(styles::container::dropdown(ctx.colors, fade))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_glyph_shows_the_target_mode() {
        assert_eq!(theme_glyph(ThemeMode::Dark), SUN);
        assert_eq!(theme_glyph(ThemeMode::Light), MOON);
    }
}
