// SPDX-License-Identifier: MPL-2.0
//! Update logic: maps messages to controller operations and controller
//! tickets to tasks.

use super::Message;
use crate::changelog::Source;
use crate::controller::{ClosingTicket, LoadState, LoadTicket, TimerOutcome, ViewController};
use crate::ui::article::ArticleView;
use crate::ui::header;
use crate::ui::theming::AppTheme;
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable application state touched by an update.
pub struct UpdateContext<'a> {
    pub controller: &'a mut ViewController,
    pub theme: &'a mut AppTheme,
    pub articles: &'a mut Vec<ArticleView>,
    pub source: &'a Source,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Header(msg) => handle_header_message(ctx, msg),
        Message::MenuTimerElapsed(ticket) => {
            match ctx.controller.menu_timer_elapsed(ticket, Instant::now()) {
                TimerOutcome::Early(remaining) => closing_timer(ticket, remaining),
                TimerOutcome::Closed | TimerOutcome::Stale => Task::none(),
            }
        }
        Message::ChangelogLoaded { ticket, result } => {
            if ctx.controller.finish_load(ticket, result) {
                refresh_articles(ctx);
            }
            Task::none()
        }
    }
}

fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match message {
        header::Message::ToggleTheme => {
            let mode = ctx.controller.toggle_theme();
            *ctx.theme = AppTheme::new(mode);
            Task::none()
        }
        header::Message::ToggleMenu => match ctx.controller.toggle_menu(Instant::now()) {
            Some(ticket) => closing_timer(ticket, ctx.controller.menu().close_delay()),
            None => Task::none(),
        },
        header::Message::SelectLanguage(language) => {
            let Some(selection) = ctx.controller.select_language(language, Instant::now()) else {
                return Task::none();
            };

            let timer = closing_timer(selection.closing, ctx.controller.menu().close_delay());
            match selection.load {
                Some(ticket) => {
                    refresh_articles(ctx);
                    Task::batch([timer, fetch(ctx.source, ticket)])
                }
                None => timer,
            }
        }
    }
}

/// Rebuilds the cached article views from the current load state.
pub fn refresh_articles(ctx: &mut UpdateContext<'_>) {
    *ctx.articles = match ctx.controller.load_state() {
        LoadState::Ready(document) => ArticleView::from_document(document, ctx.controller.text()),
        LoadState::Loading | LoadState::Failed(_) => Vec::new(),
    };
}

/// Starts the fetch for `ticket` and reports back with the same ticket.
pub fn fetch(source: &Source, ticket: LoadTicket) -> Task<Message> {
    let source = source.clone();
    tracing::debug!(
        generation = ticket.generation(),
        location = %source.describe(ticket.language()),
        "fetching changelog"
    );
    Task::perform(
        async move { source.fetch(ticket.language()).await },
        move |result| Message::ChangelogLoaded { ticket, result },
    )
}

fn closing_timer(ticket: ClosingTicket, delay: Duration) -> Task<Message> {
    // The sleep is created inside the future so it binds to the runtime
    // that polls it.
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| Message::MenuTimerElapsed(ticket),
    )
}
