// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! function takes a borrowed context and returns an `Element` whose messages
//! the application maps into controller operations.
//!
//! - [`header`] - Title bar with language dropdown and theme toggle
//! - [`changelog_view`] - Loading, error and entry list, plus the footer
//! - [`article`] - One changelog entry card
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark mode and color schemes

pub mod article;
pub mod changelog_view;
pub mod design_tokens;
pub mod header;
pub mod styles;
pub mod theming;
