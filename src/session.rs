// SPDX-License-Identifier: MPL-2.0
//! Session-scoped key-value storage.
//!
//! Values survive an application restart within the same login session and
//! vanish afterwards. On disk each key is one small file under the session
//! directory (see [`crate::app::paths::get_session_dir`]); the OS clears that
//! directory at logout. Platforms without such a directory use
//! [`MemoryStore`], which lasts for the process lifetime only.

use crate::app::paths;
use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Minimal string store with session lifetime.
pub trait SessionStore {
    /// Returns the stored value, or `None` when unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads a boolean stored as `"true"`/`"false"`.
///
/// Any other content counts as `false`, matching a plain string comparison
/// against `"true"`.
pub fn get_flag(store: &dyn SessionStore, key: &str) -> Option<bool> {
    store.get(key).map(|value| value.trim() == "true")
}

/// Writes a boolean as `"true"`/`"false"`.
pub fn set_flag(store: &mut dyn SessionStore, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" })
}

/// Process-lifetime store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a session directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are internal constants; keep them from escaping the directory.
        let sanitized: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(sanitized)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// Opens the platform session store, falling back to memory.
#[must_use]
pub fn open_default() -> Box<dyn SessionStore> {
    match paths::get_session_dir() {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using file session store");
            Box::new(FileStore::new(dir))
        }
        None => {
            tracing::debug!("no session directory, using in-memory session store");
            Box::new(MemoryStore::new())
        }
    }
}
