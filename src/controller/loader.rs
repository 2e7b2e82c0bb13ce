// SPDX-License-Identifier: MPL-2.0
//! Load state of the changelog document.
//!
//! Requests are numbered by a monotonic generation. Only the completion that
//! carries the latest generation may change the state, so a slow response
//! for an earlier language can never replace a newer one.

use crate::changelog::ChangelogDocument;
use crate::error::LoadError;
use crate::i18n::Language;

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(ChangelogDocument),
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    language: Language,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn language(self) -> Language {
        self.language
    }
}

#[derive(Debug, Default)]
pub struct LoadTracker {
    state: LoadState,
    generation: u64,
}

impl LoadTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Starts a request, superseding any in flight.
    pub fn begin(&mut self, language: Language) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        LoadTicket {
            generation: self.generation,
            language,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a completion. Returns `false` and leaves the state untouched
    /// when the ticket has been superseded.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<ChangelogDocument, LoadError>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale changelog load"
            );
            return false;
        }

        self.state = match result {
            Ok(document) => {
                tracing::info!(
                    language = %ticket.language,
                    entries = document.len(),
                    "changelog loaded"
                );
                LoadState::Ready(document)
            }
            Err(err) => {
                tracing::warn!(language = %ticket.language, %err, "changelog load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }
}
