// SPDX-License-Identifier: MPL-2.0
//! Changelog documents and where they come from.
//!
//! A document is a JSON array of `{version, date, content}` objects kept in
//! file order. Fields are trusted structurally: an entry missing a field is
//! kept with an empty string rather than rejected.

pub mod source;

pub use source::{resource_path, DirectorySource, HttpSource, Source};

use crate::error::LoadError;
use serde::{Deserialize, Serialize};

/// One release in a changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub date: String,
    /// Markdown source.
    #[serde(default)]
    pub content: String,
}

/// Entries in display order (as provided by the data source).
pub type ChangelogDocument = Vec<ChangelogEntry>;

/// Parses a changelog payload.
pub fn parse_document(bytes: &[u8]) -> Result<ChangelogDocument, LoadError> {
    serde_json::from_slice(bytes).map_err(|err| LoadError::Parse(err.to_string()))
}
