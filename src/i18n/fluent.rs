// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed string lookup and the [`TextBundle`] the view renders.

use super::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Message keys every `.ftl` file must define.
pub const TEXT_KEYS: [&str; 7] = [
    "app-title",
    "app-subtitle",
    "loading-message",
    "error-message",
    "version-label",
    "theme-toggle-label",
    "language-toggle-label",
];

/// The fixed set of localized UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBundle {
    pub title: String,
    pub subtitle: String,
    pub loading: String,
    pub error: String,
    pub version_label: String,
    pub theme_toggle_label: String,
    pub language_toggle_label: String,
}

impl TextBundle {
    /// All seven strings, in [`TEXT_KEYS`] order.
    #[must_use]
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.title,
            &self.subtitle,
            &self.loading,
            &self.error,
            &self.version_label,
            &self.theme_toggle_label,
            &self.language_toggle_label,
        ]
    }
}

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    /// Parses the embedded `.ftl` file of every supported language.
    pub fn load() -> Result<Self> {
        let mut bundles = HashMap::new();

        for lang in Language::ALL {
            let filename = format!("{}.ftl", lang.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::I18n(format!("missing resource {}", filename)))?;
            let source = String::from_utf8_lossy(file.data.as_ref()).to_string();

            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::I18n(format!("failed to parse {}: {:?}", filename, errors))
            })?;

            let mut bundle = FluentBundle::new(vec![lang.langid()]);
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                Error::I18n(format!("failed to add {}: {:?}", filename, errors))
            })?;
            bundles.insert(lang, bundle);
        }

        Ok(Self { bundles })
    }

    /// Formats one message, or `MISSING: <key>` when it is absent.
    #[must_use]
    pub fn tr(&self, lang: Language, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&lang) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }

    /// Resolves the full set of UI strings for `lang`.
    #[must_use]
    pub fn resolve(&self, lang: Language) -> TextBundle {
        TextBundle {
            title: self.tr(lang, "app-title"),
            subtitle: self.tr(lang, "app-subtitle"),
            loading: self.tr(lang, "loading-message"),
            error: self.tr(lang, "error-message"),
            version_label: self.tr(lang, "version-label"),
            theme_toggle_label: self.tr(lang, "theme-toggle-label"),
            language_toggle_label: self.tr(lang, "language-toggle-label"),
        }
    }

    /// Resolves by raw code. An unknown code is a programmer error and is
    /// reported as [`Error::UnsupportedLanguage`].
    pub fn resolve_code(&self, code: &str) -> Result<TextBundle> {
        Language::from_code(code).map(|lang| self.resolve(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i18n() -> I18n {
        I18n::load().expect("embedded resources should parse")
    }

    #[test]
    fn every_language_defines_every_key() {
        let i18n = i18n();
        for lang in Language::ALL {
            for key in TEXT_KEYS {
                let value = i18n.tr(lang, key);
                assert!(
                    !value.starts_with("MISSING"),
                    "{} is missing {}",
                    lang,
                    key
                );
            }
        }
    }

    #[test]
    fn resolve_yields_seven_non_empty_fields() {
        let i18n = i18n();
        for lang in Language::ALL {
            let bundle = i18n.resolve(lang);
            for field in bundle.fields() {
                assert!(!field.trim().is_empty(), "{} has an empty field", lang);
            }
        }
    }

    #[test]
    fn english_version_label() {
        assert_eq!(i18n().resolve(Language::English).version_label, "Version");
    }

    #[test]
    fn bundles_differ_between_languages() {
        let i18n = i18n();
        assert_ne!(
            i18n.resolve(Language::English).error,
            i18n.resolve(Language::Japanese).error
        );
    }

    #[test]
    fn resolve_code_rejects_unknown_language() {
        match i18n().resolve_code("xx") {
            Err(Error::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
    }

    #[test]
    fn resolve_code_matches_typed_lookup() {
        let i18n = i18n();
        assert_eq!(
            i18n.resolve_code("tw").unwrap(),
            i18n.resolve(Language::TraditionalChinese)
        );
    }

    #[test]
    fn unknown_key_is_marked_missing() {
        assert_eq!(i18n().tr(Language::English, "nope"), "MISSING: nope");
    }
}
