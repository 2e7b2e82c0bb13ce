// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::controller::ViewController;
use crate::ui::article::ArticleView;
use crate::ui::changelog_view::{self, MainContent};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub controller: &'a ViewController,
    pub theme: &'a AppTheme,
    pub articles: &'a [ArticleView],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.theme.colors;
    let text = ctx.controller.text();

    let header_view = header::view(HeaderViewContext {
        text,
        language: ctx.controller.language(),
        theme: ctx.theme.mode,
        menu: ctx.controller.menu(),
        colors,
    })
    .map(Message::Header);

    let main = changelog_view::view(
        MainContent::derive(text, ctx.controller.load_state(), ctx.articles),
        colors,
    );

    let column = Column::new()
        .push(header_view)
        .push(Container::new(main).width(Length::Fill).height(Length::Fill))
        .push(changelog_view::footer(colors));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(colors))
        .into()
}
