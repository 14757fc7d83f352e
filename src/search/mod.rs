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

//! The debounced search box.
//!
//! Ties the input line, the debounce scheduler and the request coordinator
//! together and exposes the resulting [`RenderState`] to the view.
//!
//! # Flow
//!
//! 1. A keystroke updates the input text at once and (re)schedules the new
//!    text with the [`Debouncer`].
//! 2. Once the input has been quiet for the debounce delay the event loop's
//!    [`Search::poll`] hands the term to the [`SearchCoordinator`], which
//!    sends a tagged request to the catalog worker.
//! 3. The worker's completion comes back through [`Search::complete`] and is
//!    committed only if no newer search has been issued since.
//!
//! Clearing the input skips the delay and issues the empty search straight
//! away.

mod coordinator;
mod debounce;
mod input;
mod resolve;

pub(crate) use resolve::RenderState;

use coordinator::SearchCoordinator;
use debounce::Debouncer;
use input::InputController;
use resolve::resolve;

use std::{
    sync::mpsc::Sender,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::Event;

use crate::{model::search::SearchCompletion, tasks::AppTask};

#[derive(Debug)]
pub(crate) struct Search {
    input: InputController,
    debouncer: Debouncer,
    coordinator: SearchCoordinator,
}

impl Search {
    pub(crate) fn new() -> Self {
        Self {
            input: InputController::new(),
            debouncer: Debouncer::default(),
            coordinator: SearchCoordinator::new(),
        }
    }

    pub(crate) fn input(&self) -> &InputController {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    /// Sets the input text and schedules a search for it.
    pub(crate) fn on_change(&mut self, raw: &str, now: Instant) {
        self.input.on_change(raw);
        self.debouncer.schedule(raw, now);
    }

    /// Feeds an editing key to the input line. Returns `true` if the text
    /// changed, in which case a search has been scheduled.
    pub(crate) fn handle_input_event(&mut self, event: &Event, now: Instant) -> bool {
        match self.input.handle_event(event) {
            Some(value) => {
                let value = value.to_string();
                self.debouncer.schedule(value, now);
                true
            }
            None => false,
        }
    }

    /// Clears the input and issues the empty search without waiting for the
    /// debounce delay. Any term still waiting on the delay is dropped.
    pub(crate) fn clear(&mut self, task_tx: &Sender<AppTask>) -> Result<()> {
        self.input.clear();
        self.debouncer.cancel();
        self.coordinator.search("", task_tx)?;

        Ok(())
    }

    /// Issues the debounced search if it is due. Returns `true` if a search
    /// was started.
    ///
    /// Issuing a search drops the previous results, so the input takes focus
    /// back from a results table that no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent to the catalog worker.
    pub(crate) fn poll(&mut self, now: Instant, task_tx: &Sender<AppTask>) -> Result<bool> {
        match self.debouncer.poll(now) {
            Some(term) => {
                self.coordinator.search(&term, task_tx)?;
                self.input.set_focused(true);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// How long the event loop may block before [`poll`](Self::poll) has
    /// work to do.
    pub(crate) fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Applies a completion from the catalog worker. Returns `true` if it was
    /// for the current search and has been committed.
    pub(crate) fn complete(&mut self, completion: SearchCompletion) -> bool {
        self.coordinator.complete(completion)
    }

    /// What the view should show right now.
    pub(crate) fn render_state(&self) -> RenderState<'_> {
        let outcome = self.coordinator.outcome();
        resolve(
            self.input.value(),
            outcome.and_then(|o| o.payload.as_deref()),
            outcome.map(|o| o.status),
        )
    }

    /// Drops any scheduled search so nothing fires after teardown.
    pub(crate) fn shutdown(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{debounce::DEBOUNCE_DELAY, *};
    use crate::model::{
        Artist, CatalogItem,
        search::{CatalogResponse, Generation, SearchRequest},
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn requests(rx: &Receiver<AppTask>) -> Vec<SearchRequest> {
        rx.try_iter()
            .map(|task| match task {
                AppTask::Search(request) => request,
                other => panic!("unexpected task {other:?}"),
            })
            .collect()
    }

    fn respond(generation: Generation, titles: &[&str]) -> SearchCompletion {
        let items = titles
            .iter()
            .map(|t| CatalogItem {
                id: t.to_string(),
                title: t.to_string(),
                artists: vec![Artist { id: 7, name: "Moderat".into() }],
                album_name: "II".into(),
                album_art: None,
                duration: 300,
            })
            .collect();

        SearchCompletion {
            generation,
            result: Ok(CatalogResponse::with_items(items)),
        }
    }

    #[test]
    fn typing_within_the_delay_makes_one_request_for_the_last_value() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.handle_input_event(&key('a'), start);
        assert!(!search.poll(start + ms(100), &tx).unwrap());

        search.handle_input_event(&key('b'), start + ms(200));
        assert!(!search.poll(start + ms(350), &tx).unwrap());
        assert!(search.poll(start + ms(500), &tx).unwrap());

        let sent = requests(&rx);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].term, "ab");
    }

    #[test]
    fn input_updates_immediately_while_loading() {
        let (tx, _rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("mod", start);
        assert_eq!(search.input().value(), "mod");
        assert_eq!(search.render_state(), RenderState::Loading { term: "mod" });

        search.poll(start + DEBOUNCE_DELAY, &tx).unwrap();
        assert_eq!(search.render_state(), RenderState::Loading { term: "mod" });
    }

    #[test]
    fn committed_results_are_rendered() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("bad kingdom", start);
        search.poll(start + DEBOUNCE_DELAY, &tx).unwrap();

        let request = requests(&rx).remove(0);
        assert!(search.complete(respond(request.generation, &["Bad Kingdom"])));

        let RenderState::Results { items } = search.render_state() else {
            panic!("expected results");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Bad Kingdom");
    }

    #[test]
    fn clearing_while_in_flight_ends_idle_despite_late_response() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("song", start);
        search.poll(start + DEBOUNCE_DELAY, &tx).unwrap();
        let in_flight = requests(&rx).remove(0);

        search.clear(&tx).unwrap();
        assert_eq!(search.render_state(), RenderState::Idle);

        assert!(!search.complete(respond(in_flight.generation, &["Song 2"])));
        assert_eq!(search.render_state(), RenderState::Idle);
        assert!(requests(&rx).is_empty());
    }

    #[test]
    fn clearing_drops_a_pending_debounced_term() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("nightcrawler", start);
        search.clear(&tx).unwrap();

        assert!(!search.poll(start + ms(1000), &tx).unwrap());
        assert!(requests(&rx).is_empty());
        assert_eq!(search.render_state(), RenderState::Idle);
    }

    #[test]
    fn clearing_after_results_returns_to_idle() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("this time", start);
        search.poll(start + DEBOUNCE_DELAY, &tx).unwrap();
        let request = requests(&rx).remove(0);
        search.complete(respond(request.generation, &["This Time"]));

        search.clear(&tx).unwrap();

        assert_eq!(search.render_state(), RenderState::Idle);
        assert_eq!(search.input().value(), "");
        assert!(search.input().is_focused());
    }

    #[test]
    fn shutdown_cancels_the_scheduled_search() {
        let (tx, rx) = mpsc::channel();
        let mut search = Search::new();
        let start = Instant::now();

        search.on_change("late", start);
        search.shutdown();

        assert_eq!(search.time_until_due(start), None);
        assert!(!search.poll(start + ms(1000), &tx).unwrap());
        assert!(requests(&rx).is_empty());
    }
}
