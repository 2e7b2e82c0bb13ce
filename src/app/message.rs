// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::changelog::ChangelogDocument;
use crate::controller::{ClosingTicket, LoadTicket};
use crate::error::LoadError;
use crate::ui::header;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    /// A closing timer slept its delay.
    MenuTimerElapsed(ClosingTicket),
    /// A fetch finished, successfully or not.
    ChangelogLoaded {
        ticket: LoadTicket,
        result: Result<ChangelogDocument, LoadError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional language override (e.g. `ja`, `zh-CN`). Takes precedence
    /// over `[general] language` in the config file.
    pub lang: Option<String>,
    /// Optional base URL or directory holding `changelogs/`.
    /// Takes precedence over `[source] base_url`.
    pub base_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CHANGELOG_VIEWER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
