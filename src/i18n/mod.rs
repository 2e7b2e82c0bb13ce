// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! The supported language set is closed and small, so it is modelled as the
//! [`Language`] enum rather than as free-form locale strings. UI strings are
//! stored in Fluent (`.ftl`) files embedded in the binary and resolved through
//! [`fluent::I18n`].
//!
//! # Features
//!
//! - Primary-subtag matching of environment locales (`en-US` -> `en`)
//! - Native display names for the language menu
//! - Fail-fast lookup of unknown codes ([`Error::UnsupportedLanguage`])

pub mod fluent;

use crate::error::{Error, Result};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A language the viewer ships strings and changelogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Japanese,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];

    /// Short code used in resource names (`changelogs/<code>.json`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::SimplifiedChinese => "zh",
            Language::TraditionalChinese => "tw",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
        }
    }

    /// Looks up a language by its exact code.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
    }

    /// Matches an environment locale tag against the supported set using
    /// only its primary subtag.
    ///
    /// Accepts BCP-47 (`en-US`) as well as POSIX-style tags (`ja_JP.UTF-8`).
    /// Returns `None` for empty, malformed, or unsupported tags.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let primary = primary_subtag(tag)?;
        Self::from_code(&primary).ok()
    }

    /// Fluent language identifier for this language.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        // Every code is a well-formed two-letter subtag.
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Extracts the lowercase primary language subtag from a locale tag.
fn primary_subtag(tag: &str) -> Option<String> {
    // Strip a POSIX codeset/modifier (".UTF-8", "@euro") and normalise separators.
    let cleaned = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<LanguageIdentifier>() {
        Ok(langid) => Some(langid.language.as_str().to_ascii_lowercase()),
        // Tags unic-langid rejects still carry a usable primary subtag.
        Err(_) => cleaned
            .split('-')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_ascii_lowercase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn from_code_rejects_unknown() {
        match Language::from_code("fr") {
            Err(Error::UnsupportedLanguage(code)) => assert_eq!(code, "fr"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
    }

    #[test]
    fn locale_tag_uses_primary_subtag() {
        assert_eq!(Language::from_locale_tag("en-US"), Some(Language::English));
        assert_eq!(Language::from_locale_tag("ja"), Some(Language::Japanese));
        assert_eq!(
            Language::from_locale_tag("zh-Hans-CN"),
            Some(Language::SimplifiedChinese)
        );
    }

    #[test]
    fn locale_tag_accepts_posix_format() {
        assert_eq!(
            Language::from_locale_tag("ja_JP.UTF-8"),
            Some(Language::Japanese)
        );
        assert_eq!(Language::from_locale_tag("EN_gb"), Some(Language::English));
    }

    #[test]
    fn region_does_not_select_traditional_chinese() {
        // Only the primary subtag counts: zh-TW is still "zh".
        assert_eq!(
            Language::from_locale_tag("zh-TW"),
            Some(Language::SimplifiedChinese)
        );
    }

    #[test]
    fn unsupported_or_empty_tags_yield_none() {
        assert_eq!(Language::from_locale_tag("fr-FR"), None);
        assert_eq!(Language::from_locale_tag(""), None);
        assert_eq!(Language::from_locale_tag("   "), None);
        assert_eq!(Language::from_locale_tag("C"), None);
    }

    #[test]
    fn native_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            Language::ALL.iter().map(|l| l.native_name()).collect();
        assert_eq!(names.len(), Language::ALL.len());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
