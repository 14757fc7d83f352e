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

//! Search debounce scheduling.
//!
//! A search term is only handed on once the input has been quiet for the
//! debounce delay. Every new term replaces the pending one and restarts the
//! timer. The scheduler does not own a thread: the event loop asks it how
//! long it may sleep ([`Debouncer::time_until_due`]) and then collects the
//! due term with [`Debouncer::poll`].

use std::time::{Duration, Instant};

use tracing::trace;

/// How long the input must be quiet before a search is issued.
pub(crate) const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct Pending {
    term: String,
    deadline: Instant,
}

#[derive(Debug)]
pub(crate) struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Registers `term` as the pending value, cancelling whatever was pending
    /// and restarting the timer from `now`.
    ///
    /// An empty term is scheduled like any other.
    pub(crate) fn schedule(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        trace!(term = %term, "debounce scheduled");

        self.pending = Some(Pending {
            term,
            deadline: now + self.delay,
        });
    }

    /// Drops the pending term, if any. Nothing fires after a cancel until the
    /// next [`schedule`](Self::schedule).
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the pending term once its deadline has passed.
    ///
    /// The term is handed out exactly once.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return None;
        }

        self.pending.take().map(|p| p.term)
    }

    /// How long until the pending term is due, `None` when nothing is
    /// pending.
    pub(crate) fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}
