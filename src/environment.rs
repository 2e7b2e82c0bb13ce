// SPDX-License-Identifier: MPL-2.0
//! Read-only probes of the operating environment.
//!
//! Probes are best-effort: a failed detection is reported as `None` and the
//! caller falls through to its default.

use crate::ui::theming::ThemeMode;

/// Ambient signals consulted when computing initial preferences.
pub trait Environment {
    /// The OS light/dark preference, if it can be determined.
    fn color_scheme_hint(&self) -> Option<ThemeMode>;

    /// The OS preferred locale tag (e.g. `en-US`), if any.
    fn preferred_language(&self) -> Option<String>;
}

/// Probes the running system via `dark-light` and `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn color_scheme_hint(&self) -> Option<ThemeMode> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(ThemeMode::Dark),
            Ok(dark_light::Mode::Light) => Some(ThemeMode::Light),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(err) => {
                tracing::debug!(?err, "color scheme detection failed");
                None
            }
        }
    }

    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Fixed signals, for tests and for launching with explicit overrides.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvironment {
    pub color_scheme: Option<ThemeMode>,
    pub language: Option<String>,
}

impl Environment for StaticEnvironment {
    fn color_scheme_hint(&self) -> Option<ThemeMode> {
        self.color_scheme
    }

    fn preferred_language(&self) -> Option<String> {
        self.language.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_environment_reports_given_values() {
        let env = StaticEnvironment {
            color_scheme: Some(ThemeMode::Dark),
            language: Some("ja-JP".into()),
        };
        assert_eq!(env.color_scheme_hint(), Some(ThemeMode::Dark));
        assert_eq!(env.preferred_language().as_deref(), Some("ja-JP"));
    }

    #[test]
    fn system_environment_probes_do_not_panic() {
        let env = SystemEnvironment;
        let _ = env.color_scheme_hint();
        let _ = env.preferred_language();
    }
}
