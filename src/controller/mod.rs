// SPDX-License-Identifier: MPL-2.0
//! The view-state controller.
//!
//! [`ViewController`] owns every piece of state the view depends on (theme,
//! language, localized text, load state, language menu) as explicit fields.
//! Operations never perform I/O beyond the session flag write: they return
//! tickets describing the asynchronous work the host must schedule (a fetch
//! for a [`LoadTicket`], a timer for a [`ClosingTicket`]) and accept the
//! results back through [`ViewController::finish_load`] and
//! [`ViewController::menu_timer_elapsed`].

pub mod loader;
pub mod menu;
pub mod preference;

pub use loader::{LoadState, LoadTicket, LoadTracker};
pub use menu::{ClosingTicket, LanguageMenu, MenuState, TimerOutcome};
pub use preference::Preference;

use crate::changelog::ChangelogDocument;
use crate::environment::Environment;
use crate::error::LoadError;
use crate::i18n::fluent::{I18n, TextBundle};
use crate::i18n::Language;
use crate::session::{self, SessionStore, DARK_MODE_KEY};
use crate::ui::theming::ThemeMode;
use std::fmt;
use std::time::{Duration, Instant};

/// Startup knobs that do not come from the environment.
#[derive(Debug, Clone, Default)]
pub struct ControllerOptions {
    /// Explicit language (CLI or config), validated like the OS signal.
    pub language_override: Option<String>,
    /// Closing animation delay; `None` uses the default.
    pub close_delay: Option<Duration>,
}

/// Work requested by a language selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Timer to schedule for the closing menu.
    pub closing: ClosingTicket,
    /// Fetch to start, when the language actually changed.
    pub load: Option<LoadTicket>,
}

pub struct ViewController {
    preference: Preference,
    i18n: I18n,
    text: TextBundle,
    load: LoadTracker,
    menu: LanguageMenu,
    store: Box<dyn SessionStore>,
}

impl fmt::Debug for ViewController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("preference", &self.preference)
            .field("load", &self.load)
            .field("menu", &self.menu)
            .finish()
    }
}

impl ViewController {
    /// Builds the controller from ambient signals and writes the initial
    /// theme flag to the session store.
    pub fn new(
        i18n: I18n,
        store: Box<dyn SessionStore>,
        env: &dyn Environment,
        options: ControllerOptions,
    ) -> Self {
        let preference =
            Preference::detect(&*store, env, options.language_override.as_deref());
        let text = i18n.resolve(preference.language);
        let menu = match options.close_delay {
            Some(delay) => LanguageMenu::new(delay),
            None => LanguageMenu::default(),
        };

        tracing::info!(
            theme = ?preference.theme,
            language = %preference.language,
            "initial preferences"
        );

        let mut controller = Self {
            preference,
            i18n,
            text,
            load: LoadTracker::new(),
            menu,
            store,
        };
        controller.persist_theme();
        controller
    }

    #[must_use]
    pub fn preference(&self) -> Preference {
        self.preference
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.preference.theme
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.preference.language
    }

    /// Localized strings for the active language.
    #[must_use]
    pub fn text(&self) -> &TextBundle {
        &self.text
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        self.load.state()
    }

    #[must_use]
    pub fn menu(&self) -> &LanguageMenu {
        &self.menu
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[must_use]
    pub fn session_store(&self) -> &dyn SessionStore {
        &*self.store
    }

    /// Requests the document for the initial language.
    pub fn start(&mut self) -> LoadTicket {
        self.load.begin(self.preference.language)
    }

    /// Flips Light/Dark and persists the new value.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.preference.theme = self.preference.theme.toggled();
        self.persist_theme();
        self.preference.theme
    }

    /// Menu button activation.
    pub fn toggle_menu(&mut self, now: Instant) -> Option<ClosingTicket> {
        self.menu.toggle(now)
    }

    /// Picks a language from the open menu. Returns `None` (and changes
    /// nothing) unless the menu is `Open`.
    pub fn select_language(&mut self, language: Language, now: Instant) -> Option<Selection> {
        let closing = self.menu.close_after_selection(now)?;

        let load = (language != self.preference.language).then(|| {
            self.preference.language = language;
            self.text = self.i18n.resolve(language);
            tracing::info!(%language, "language changed");
            self.load.begin(language)
        });

        Some(Selection { closing, load })
    }

    pub fn menu_timer_elapsed(&mut self, ticket: ClosingTicket, now: Instant) -> TimerOutcome {
        self.menu.timer_elapsed(ticket, now)
    }

    /// Applies a fetch result. Returns `false` when it was stale and ignored.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ChangelogDocument, LoadError>,
    ) -> bool {
        self.load.complete(ticket, result)
    }

    fn persist_theme(&mut self) {
        let dark = self.preference.theme.is_dark();
        if let Err(err) = session::set_flag(&mut *self.store, DARK_MODE_KEY, dark) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
    }
}
