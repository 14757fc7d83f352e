// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Search request coordination.
//!
//! The coordinator owns the last committed search outcome and the generation
//! of the most recently issued request. Only a completion carrying the
//! current generation may replace the outcome; everything else was
//! superseded while in flight and is dropped.

use std::sync::mpsc::Sender;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    model::search::{Generation, SearchCompletion, SearchOutcome, SearchRequest},
    tasks::AppTask,
};

#[derive(Debug, Default)]
pub(crate) struct SearchCoordinator {
    generation: Generation,
    outcome: Option<SearchOutcome>,
    committed: bool,
}

impl SearchCoordinator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Starts a new search for `term`.
    ///
    /// The previous outcome is cleared before anything is sent, so outstanding
    /// requests lose the ability to commit straight away. An empty term sends
    /// nothing and leaves the outcome absent.
    pub(crate) fn search(&mut self, term: &str, task_tx: &Sender<AppTask>) -> Result<Generation> {
        self.generation = self.generation.next();
        self.outcome = None;
        self.committed = false;

        if term.is_empty() {
            debug!(generation = self.generation.value(), "search cleared");
            return Ok(self.generation);
        }

        debug!(generation = self.generation.value(), term, "search issued");

        task_tx.send(AppTask::Search(SearchRequest {
            generation: self.generation,
            term: term.to_string(),
        }))?;

        Ok(self.generation)
    }

    /// Applies a completion from the catalog worker.
    ///
    /// Returns `true` when the completion was committed. A failed catalog
    /// call is committed as [`SearchOutcome::failed`] so the view never waits
    /// on a search that will not come back.
    pub(crate) fn complete(&mut self, completion: SearchCompletion) -> bool {
        if completion.generation != self.generation || self.committed {
            debug!(
                generation = completion.generation.value(),
                current = self.generation.value(),
                "discarding stale search result"
            );
            return false;
        }

        let outcome = match completion.result {
            Ok(response) => {
                info!(
                    generation = completion.generation.value(),
                    status = response.status.code(),
                    items = response.payload.as_ref().map_or(0, Vec::len),
                    "search completed"
                );
                SearchOutcome::from(response)
            }
            Err(e) => {
                warn!(generation = completion.generation.value(), error = %e, "search failed");
                SearchOutcome::failed()
            }
        };

        self.outcome = Some(outcome);
        self.committed = true;

        true
    }
}
