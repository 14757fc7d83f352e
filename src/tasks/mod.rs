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

//! Background catalog tasks.
//!
//! Catalog work never runs on the UI thread. The event loop sends
//! [`AppTask`]s to a dedicated worker which owns the catalog, and the worker
//! answers with [`AppEvent`]s.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{error, warn};

use crate::{
    catalog::{CatalogService, LibraryCatalog},
    config::AppConfig,
    events::AppEvent,
    model::search::SearchRequest,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    ScanCatalog,

    Search(SearchRequest),
}

/// Spawns the catalog worker thread.
///
/// The worker opens the catalog itself so the connection never leaves the
/// thread. If the catalog cannot be opened a fatal error event is sent and
/// the worker exits.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let catalog = match LibraryCatalog::open(&config.database_file, config.result_limit) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = %format!("{:#}", e), "failed to open catalog");
                let _ = event_tx.send(AppEvent::FatalError(format!("{:#}", e)));
                return;
            }
        };

        run_task_loop(&config, catalog, task_rx, event_tx);
    });
}

/// Processes tasks until the sending side of the channel goes away.
pub(crate) fn run_task_loop<C: CatalogService>(
    config: &AppConfig,
    mut catalog: C,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    while let Ok(task) = task_rx.recv() {
        let mut ctx = TaskContext {
            config,
            event_tx: &event_tx,
            catalog: &mut catalog,
        };

        if let Err(e) = handle_task(task, &mut ctx) {
            warn!(error = %e, "task failed");
            let _ = event_tx.send(AppEvent::Error(e.to_string()));
        }
    }
}

struct TaskContext<'a, C> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    catalog: &'a mut C,
}

fn handle_task<C: CatalogService>(task: AppTask, ctx: &mut TaskContext<'_, C>) -> Result<()> {
    match task {
        AppTask::ScanCatalog => scan_catalog(ctx),

        AppTask::Search(request) => search(ctx, request),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{
        error::CatalogError,
        model::search::{CatalogResponse, Generation, ResponseStatus},
    };

    /// Answers "fail" with an error, "none" with no content, and anything
    /// else with an empty payload.
    struct FakeCatalog {
        scanned: Vec<String>,
    }

    impl CatalogService for FakeCatalog {
        fn search_catalog(&mut self, term: &str) -> Result<CatalogResponse, CatalogError> {
            match term {
                "fail" => Err(CatalogError::Io(std::io::Error::other("connection reset"))),
                "none" => Ok(CatalogResponse::no_content()),
                _ => Ok(CatalogResponse::with_items(vec![])),
            }
        }

        fn rescan(&mut self, media_dirs: &[String]) -> Result<u64, CatalogError> {
            self.scanned.extend(media_dirs.iter().cloned());
            Ok(42)
        }
    }

    fn run(tasks: Vec<AppTask>) -> Vec<AppEvent> {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        for task in tasks {
            task_tx.send(task).unwrap();
        }
        drop(task_tx);

        let config = AppConfig {
            media_dirs: vec!["/music".into()],
            ..AppConfig::default()
        };
        run_task_loop(&config, FakeCatalog { scanned: vec![] }, task_rx, event_tx);

        event_rx.try_iter().collect()
    }

    fn request(generation: Generation, term: &str) -> AppTask {
        AppTask::Search(SearchRequest {
            generation,
            term: term.to_string(),
        })
    }

    #[test]
    fn every_search_is_answered_with_its_generation() {
        let g1 = Generation::default().next();
        let g2 = g1.next();
        let g3 = g2.next();

        let events = run(vec![request(g1, "ok"), request(g2, "none"), request(g3, "fail")]);
        assert_eq!(events.len(), 3);

        match &events[0] {
            AppEvent::SearchCompleted(c) => {
                assert_eq!(c.generation, g1);
                assert_eq!(c.result.as_ref().unwrap().status, ResponseStatus::Ok);
            }
            other => panic!("unexpected event {other:?}"),
        }

        match &events[1] {
            AppEvent::SearchCompleted(c) => {
                assert_eq!(c.generation, g2);
                assert_eq!(c.result.as_ref().unwrap().status, ResponseStatus::NoContent);
            }
            other => panic!("unexpected event {other:?}"),
        }

        match &events[2] {
            AppEvent::SearchCompleted(c) => {
                assert_eq!(c.generation, g3);
                assert!(c.result.is_err());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn scan_reports_started_and_finished() {
        let events = run(vec![AppTask::ScanCatalog]);

        assert!(matches!(events[0], AppEvent::ScanStarted));
        assert!(matches!(events[1], AppEvent::ScanFinished(42)));
    }
}
