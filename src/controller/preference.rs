// SPDX-License-Identifier: MPL-2.0
//! Initial preferences derived from the environment.
//!
//! Nothing here touches the network and nothing here fails: each probe falls
//! through to the next, ending at a fixed default.

use crate::environment::Environment;
use crate::i18n::Language;
use crate::session::{self, SessionStore, DARK_MODE_KEY};
use crate::ui::theming::ThemeMode;

/// The user's presentation choices for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    pub theme: ThemeMode,
    pub language: Language,
}

impl Preference {
    /// Computes the startup preference.
    ///
    /// `language_override` comes from the CLI or config file and is checked
    /// against the supported set like any other signal.
    pub fn detect(
        store: &dyn SessionStore,
        env: &dyn Environment,
        language_override: Option<&str>,
    ) -> Self {
        Self {
            theme: initial_theme(store, env),
            language: initial_language(language_override, env),
        }
    }
}

/// Session flag, then OS hint, then Light.
pub fn initial_theme(store: &dyn SessionStore, env: &dyn Environment) -> ThemeMode {
    if let Some(dark) = session::get_flag(store, DARK_MODE_KEY) {
        return ThemeMode::from_dark_flag(dark);
    }
    env.color_scheme_hint().unwrap_or_default()
}

/// Override, then OS locale (primary subtag), then English.
pub fn initial_language(language_override: Option<&str>, env: &dyn Environment) -> Language {
    if let Some(tag) = language_override {
        match Language::from_locale_tag(tag) {
            Some(lang) => return lang,
            None => tracing::warn!(tag, "ignoring unsupported language override"),
        }
    }

    env.preferred_language()
        .as_deref()
        .and_then(Language::from_locale_tag)
        .unwrap_or_default()
}
