// SPDX-License-Identifier: MPL-2.0
//! `changelog_viewer` is a small localized changelog viewer built with the
//! Iced GUI framework.
//!
//! It fetches a per-language JSON changelog, renders each entry's markdown,
//! and offers a dark-mode toggle and a language switcher. The state behind
//! the view lives in [`controller::ViewController`].

pub mod app;
pub mod changelog;
pub mod config;
pub mod controller;
pub mod environment;
pub mod error;
pub mod i18n;
pub mod markdown;
pub mod session;
pub mod ui;
