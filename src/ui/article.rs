// SPDX-License-Identifier: MPL-2.0
//! One changelog entry, prepared for display.
//!
//! An [`ArticleView`] is built once per load (or language change) so the
//! markdown is not re-parsed every frame.

use crate::changelog::ChangelogEntry;
use crate::i18n::fluent::TextBundle;
use crate::markdown::{self, Block};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    /// Localized label followed by the version, e.g. "Version 1.2.0".
    pub version_label: String,
    pub date: String,
    pub blocks: Vec<Block>,
    /// Markdown source, kept for [`ArticleView::to_html`].
    pub markdown: String,
}

impl ArticleView {
    #[must_use]
    pub fn from_entry(entry: &ChangelogEntry, text: &TextBundle) -> Self {
        Self {
            version_label: format!("{} {}", text.version_label, entry.version),
            date: entry.date.clone(),
            blocks: markdown::to_blocks(&entry.content),
            markdown: entry.content.clone(),
        }
    }

    /// Builds one view per entry, preserving document order.
    #[must_use]
    pub fn from_document(entries: &[ChangelogEntry], text: &TextBundle) -> Vec<Self> {
        entries
            .iter()
            .map(|entry| Self::from_entry(entry, text))
            .collect()
    }

    /// HTML export of the article for embedders and tests; the native view
    /// draws [`Self::blocks`] instead. The body is not sanitized.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<article class=\"changelog-entry\"><header>\
             <span class=\"version\">{}</span><time>{}</time></header>\
             <div class=\"markdown-content\">{}</div></article>",
            escape(&self.version_label),
            escape(&self.date),
            markdown::to_html(&self.markdown)
        )
    }

    /// Card with a version badge, the date, and the rendered body.
    pub fn view<'a, Message: 'a>(&'a self, colors: ColorScheme) -> Element<'a, Message> {
        let badge = Container::new(
            Text::new(self.version_label.as_str())
                .size(typography::BODY)
                .color(colors.brand_primary),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(colors));

        let meta = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(badge)
            .push(
                Text::new(self.date.as_str())
                    .size(typography::BODY)
                    .color(colors.text_secondary),
            );

        let body = self
            .blocks
            .iter()
            .fold(Column::new().spacing(spacing::XS), |col, block| {
                col.push(block_view(block, colors))
            });

        let content = Column::new()
            .spacing(spacing::MD)
            .push(meta)
            .push(rule(colors))
            .push(body);

        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .style(styles::container::card(colors))
            .into()
    }
}

fn block_view<'a, Message: 'a>(block: &'a Block, colors: ColorScheme) -> Element<'a, Message> {
    match block {
        Block::Heading { level, text } => Text::new(text.as_str())
            .size(typography::heading(*level))
            .color(colors.text_primary)
            .into(),
        Block::Paragraph(text) => Text::new(text.as_str())
            .size(typography::BODY_LG)
            .color(colors.text_primary)
            .into(),
        Block::ListItem {
            depth,
            marker,
            text,
        } => {
            let indent = spacing::MD * depth.saturating_sub(1) as f32;
            Row::new()
                .spacing(spacing::XS)
                .padding(iced::Padding {
                    left: indent,
                    ..iced::Padding::ZERO
                })
                .push(Text::new(marker.as_str()).color(colors.brand_primary))
                .push(Text::new(text.as_str()).color(colors.text_primary))
                .into()
        }
        Block::Code(code) => Container::new(
            Text::new(code.as_str())
                .font(Font::MONOSPACE)
                .size(typography::BODY),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::code_block(colors))
        .into(),
        Block::Quote(text) => Container::new(
            Text::new(text.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        )
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::quote(colors))
        .into(),
        Block::Rule => rule(colors),
    }
}

fn rule<'a, Message: 'a>(colors: ColorScheme) -> Element<'a, Message> {
    Container::new(Text::new(""))
        .width(Length::Fill)
        .height(border::WIDTH_SM)
        .style(styles::container::divider(colors))
        .into()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
