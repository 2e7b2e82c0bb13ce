// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Two locations matter to the viewer:
//!
//! - the **config directory**, holding the user-editable `settings.toml`
//! - the **session directory**, holding values that must survive a restart
//!   within the same login session but not beyond it
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CHANGELOG_VIEWER_CONFIG_DIR`,
//!    `CHANGELOG_VIEWER_SESSION_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The session directory lives under `dirs::runtime_dir()` (`$XDG_RUNTIME_DIR`),
//! which the OS clears at logout. Platforms without a runtime directory get
//! `None`, and callers fall back to an in-memory store.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ChangelogViewer";

/// Sub-directory of the runtime dir that holds session keys.
const SESSION_SUBDIR: &str = "session";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CHANGELOG_VIEWER_CONFIG_DIR";

/// Environment variable to override the session directory.
pub const ENV_SESSION_DIR: &str = "CHANGELOG_VIEWER_SESSION_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path, unless `override_path`
/// is given.
///
/// - Linux: `~/.config/ChangelogViewer/`
/// - macOS: `~/Library/Application Support/ChangelogViewer/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ChangelogViewer\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the session-scoped directory, e.g.
/// `/run/user/1000/ChangelogViewer/session/` on Linux.
///
/// Returns `None` on platforms without a per-session runtime directory.
pub fn get_session_dir() -> Option<PathBuf> {
    get_session_dir_with_override(None)
}

/// Returns the session-scoped directory with an optional override.
pub fn get_session_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_SESSION_DIR) {
        return Some(path);
    }

    dirs::runtime_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(SESSION_SUBDIR);
        path
    })
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_session_dir() {
        let override_path = PathBuf::from("/custom/session/path");
        let result = get_session_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_session_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/session/dir";
        std::env::set_var(ENV_SESSION_DIR, test_path);

        let result = get_session_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_SESSION_DIR);
    }

    #[test]
    fn session_dir_default_is_namespaced() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_SESSION_DIR);

        // Only platforms with a runtime dir yield a path
        if let Some(path) = get_session_dir() {
            assert!(path.ends_with(PathBuf::from(APP_NAME).join(SESSION_SUBDIR)));
        }
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
