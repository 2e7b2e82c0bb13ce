// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the [`ViewController`] and the configured
//! changelog [`Source`], and translates controller tickets into `iced`
//! tasks (fetches and closing timers).

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::changelog::{DirectorySource, Source};
use crate::config::{self, DEFAULT_BASE_URL};
use crate::controller::{ControllerOptions, ViewController};
use crate::environment::SystemEnvironment;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::session;
use crate::ui::article::ArticleView;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    controller: ViewController,
    source: Source,
    theme: AppTheme,
    /// Article views for the `Ready` document, rebuilt on every change.
    articles: Vec<ArticleView>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("articles", &self.articles.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let booted = App::new(flags)?;

    // iced 0.14 requires a `Fn` boot closure; the state is handed out once.
    let boot_state = RefCell::new(Some(booted));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once")
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()?;
    Ok(())
}

impl App {
    /// Loads configuration, probes the environment and requests the
    /// document for the initial language.
    fn new(flags: Flags) -> Result<(Self, Task<Message>)> {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "failed to load settings, using defaults");
        }

        let base_url = flags
            .base_url
            .as_deref()
            .unwrap_or_else(|| config.base_url());
        let source = Source::from_base(base_url, config.timeout()).unwrap_or_else(|err| {
            tracing::warn!(%err, base_url, "invalid changelog source, using current directory");
            Source::Directory(DirectorySource::new(DEFAULT_BASE_URL))
        });

        let options = ControllerOptions {
            language_override: flags.lang.or_else(|| config.general.language.clone()),
            close_delay: Some(config.close_delay()),
        };
        let controller = ViewController::new(
            I18n::load()?,
            session::open_default(),
            &SystemEnvironment,
            options,
        );

        Ok(Self::with_parts(controller, source))
    }

    /// Assembles an app around an existing controller and starts the first
    /// load.
    pub fn with_parts(mut controller: ViewController, source: Source) -> (Self, Task<Message>) {
        let ticket = controller.start();
        let theme = AppTheme::new(controller.theme());
        let task = update::fetch(&source, ticket);

        let app = Self {
            controller,
            source,
            theme,
            articles: Vec::new(),
        };
        (app, task)
    }

    #[must_use]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    #[must_use]
    pub fn articles(&self) -> &[ArticleView] {
        &self.articles
    }

    pub fn title(&self) -> String {
        self.controller.text().title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            theme: &mut self.theme,
            articles: &mut self.articles,
            source: &self.source,
        };
        update::handle_message(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            controller: &self.controller,
            theme: &self.theme,
            articles: &self.articles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::ChangelogEntry;
    use crate::controller::{LoadState, MenuState};
    use crate::environment::StaticEnvironment;
    use crate::i18n::Language;
    use crate::session::{get_flag, MemoryStore, DARK_MODE_KEY};
    use crate::ui::header;
    use crate::ui::theming::ThemeMode;
    use std::time::{Duration, Instant};

    fn test_app() -> (App, crate::controller::LoadTicket) {
        test_app_with_delay(Duration::ZERO)
    }

    fn test_app_with_delay(close_delay: Duration) -> (App, crate::controller::LoadTicket) {
        let controller = ViewController::new(
            I18n::load().expect("i18n"),
            Box::new(MemoryStore::new()),
            &StaticEnvironment::default(),
            ControllerOptions {
                language_override: None,
                close_delay: Some(close_delay),
            },
        );
        let source = Source::Directory(DirectorySource::new("."));
        let (mut app, _task) = App::with_parts(controller, source);
        // `with_parts` started generation 1; restart to get a ticket in hand.
        let ticket = app.controller.start();
        (app, ticket)
    }

    fn entries() -> Vec<ChangelogEntry> {
        vec![ChangelogEntry {
            version: "1.2.0".into(),
            date: "2025-01-01".into(),
            content: "# Hi\n- item".into(),
        }]
    }

    #[test]
    fn starts_loading_with_localized_title() {
        let (app, _) = test_app();
        assert!(app.controller().load_state().is_loading());
        assert_eq!(app.title(), app.controller().text().title);
    }

    #[test]
    fn loaded_document_builds_articles() {
        let (mut app, ticket) = test_app();
        let _ = app.update(Message::ChangelogLoaded {
            ticket,
            result: Ok(entries()),
        });
        assert_eq!(app.articles().len(), 1);
        assert_eq!(app.articles()[0].version_label, "Version 1.2.0");
    }

    #[test]
    fn toggle_theme_updates_iced_theme_and_session() {
        let (mut app, _) = test_app();
        assert!(matches!(app.theme(), Theme::Light));

        let _ = app.update(Message::Header(header::Message::ToggleTheme));

        assert!(matches!(app.theme(), Theme::Dark));
        assert_eq!(app.controller().theme(), ThemeMode::Dark);
        assert_eq!(
            get_flag(app.controller().session_store(), DARK_MODE_KEY),
            Some(true)
        );
    }

    #[test]
    fn language_selection_relocalizes_and_clears_articles() {
        let (mut app, ticket) = test_app();
        let _ = app.update(Message::ChangelogLoaded {
            ticket,
            result: Ok(entries()),
        });

        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert_eq!(app.controller().menu_state(), MenuState::Open);

        let _ = app.update(Message::Header(header::Message::SelectLanguage(
            Language::Japanese,
        )));
        assert_eq!(app.controller().menu_state(), MenuState::Closing);
        assert_eq!(app.controller().language(), Language::Japanese);
        assert_eq!(app.title(), app.controller().text().title);
        assert!(app.articles().is_empty());
        assert!(app.controller().load_state().is_loading());
    }

    #[test]
    fn stale_load_is_ignored() {
        let (mut app, first) = test_app();
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        let _ = app.update(Message::Header(header::Message::SelectLanguage(
            Language::SimplifiedChinese,
        )));

        let _ = app.update(Message::ChangelogLoaded {
            ticket: first,
            result: Ok(entries()),
        });
        assert!(app.articles().is_empty());
        assert_eq!(app.controller().load_state(), &LoadState::Loading);
    }

    #[test]
    fn early_menu_timer_is_rescheduled() {
        let (mut app, _) = test_app_with_delay(Duration::from_secs(60));
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert_eq!(app.controller().menu_state(), MenuState::Open);

        // Second activation starts closing; keep the ticket the timer would carry.
        let ticket = app
            .controller
            .toggle_menu(Instant::now())
            .expect("open menu starts closing");

        let task = app.update(Message::MenuTimerElapsed(ticket));

        assert_eq!(app.controller().menu_state(), MenuState::Closing);
        assert!(task.units() > 0, "early timer must sleep again");
    }

    #[test]
    fn stale_menu_timer_leaves_menu_closing() {
        let (mut app, _) = test_app_with_delay(Duration::from_secs(60));
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        let first = app
            .controller
            .toggle_menu(Instant::now())
            .expect("open menu starts closing");
        let _second = app
            .controller
            .toggle_menu(Instant::now())
            .expect("closing menu restarts closing");

        let task = app.update(Message::MenuTimerElapsed(first));

        assert_eq!(app.controller().menu_state(), MenuState::Closing);
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn elapsed_menu_timer_closes_menu() {
        let (mut app, _) = test_app();
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        let ticket = app
            .controller
            .toggle_menu(Instant::now())
            .expect("open menu starts closing");

        let task = app.update(Message::MenuTimerElapsed(ticket));

        assert_eq!(app.controller().menu_state(), MenuState::Closed);
        assert_eq!(task.units(), 0);
    }
}
