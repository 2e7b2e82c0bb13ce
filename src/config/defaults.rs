// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Source**: Where changelog documents are fetched from
//! - **Menu**: Language menu closing animation

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Default base for changelog documents: the current working directory,
/// so `./changelogs/<code>.json` is read from disk.
pub const DEFAULT_BASE_URL: &str = ".";

/// Path template for a changelog document, relative to the base.
/// `{lang}` is replaced by the language code.
pub const CHANGELOG_PATH_TEMPLATE: &str = "changelogs/{lang}.json";

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Menu Defaults
// ==========================================================================

/// Default delay between a menu entering `Closing` and being removed.
pub const DEFAULT_MENU_CLOSE_DELAY_MS: u64 = 400;

/// Maximum accepted closing delay.
pub const MAX_MENU_CLOSE_DELAY_MS: u64 = 2_000;
