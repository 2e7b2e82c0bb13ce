// SPDX-License-Identifier: MPL-2.0
//! Main area: loading message, error card, or the list of entries.

use crate::controller::LoadState;
use crate::i18n::fluent::TextBundle;
use crate::ui::article::ArticleView;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub const FOOTER_TEXT: &str = "Changelog Viewer • 2025";

/// What the main area currently shows, with its strings resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainContent<'a> {
    Loading {
        message: &'a str,
    },
    Failed {
        headline: &'a str,
        detail: &'a str,
    },
    Entries(&'a [ArticleView]),
}

impl<'a> MainContent<'a> {
    /// Derives the main area from the load state.
    ///
    /// `articles` must have been built from the `Ready` document.
    #[must_use]
    pub fn derive(text: &'a TextBundle, state: &'a LoadState, articles: &'a [ArticleView]) -> Self {
        match state {
            LoadState::Loading => MainContent::Loading {
                message: &text.loading,
            },
            LoadState::Failed(detail) => MainContent::Failed {
                headline: &text.error,
                detail,
            },
            LoadState::Ready(_) => MainContent::Entries(articles),
        }
    }
}

pub fn view<'a, Message: 'a>(content: MainContent<'a>, colors: ColorScheme) -> Element<'a, Message> {
    let body: Element<'a, Message> = match content {
        MainContent::Loading { message } => Container::new(
            Text::new(message)
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        )
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .into(),
        MainContent::Failed { headline, detail } => {
            let card = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(headline)
                        .size(typography::TITLE_SM)
                        .color(colors.error),
                )
                .push(
                    Text::new(detail)
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                );

            Container::new(
                Container::new(card)
                    .padding(spacing::XXL)
                    .center_x(Length::Fill)
                    .max_width(sizing::CONTENT_MAX_WIDTH)
                    .style(styles::container::card(colors)),
            )
            .center_x(Length::Fill)
            .into()
        }
        MainContent::Entries(articles) => articles
            .iter()
            .fold(
                Column::new()
                    .spacing(spacing::LG)
                    .align_x(Horizontal::Center)
                    .width(Length::Fill),
                |col, article| col.push(article.view(colors)),
            )
            .into(),
    };

    scrollable(
        Container::new(body)
            .padding([spacing::XL, spacing::MD])
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

pub fn footer<'a, Message: 'a>(colors: ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(FOOTER_TEXT)
            .size(typography::CAPTION)
            .color(colors.text_secondary),
    )
    .padding(spacing::LG)
    .center_x(Length::Fill)
    .style(styles::container::bar(colors))
    .into()
}
