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

//! Application events and the main event loop.
//!
//! Everything that changes application state arrives here as an
//! [`AppEvent`]: key presses from the input thread, ticks, and the answers
//! the catalog worker sends back. The loop also owns the debounce clock.
//! Between events it blocks only until the pending search falls due, then
//! hands the search to the catalog worker.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::{process_key_event, process_paste};

use std::{
    io::Stdout,
    sync::mpsc::{RecvTimeoutError, Sender},
    time::{Duration, Instant},
};

use anyhow::{Result, bail};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use crate::{
    App,
    components::SelectionDelegate,
    model::{SelectedSong, search::SearchCompletion},
    render::draw,
};

/// Longest the loop sleeps when no search is waiting on the debounce delay.
const IDLE_WAIT: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),

    SearchCompleted(SearchCompletion),
    SongSelected(SelectedSong),

    ScanStarted,
    ScanFinished(u64),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Picked results are posted back onto the event loop.
impl SelectionDelegate for Sender<AppEvent> {
    fn on_item_selected(&self, song: SelectedSong) {
        self.send(AppEvent::SongSelected(song)).ok();
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. A pending debounced search is dropped on the way out.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    let result = run_loop(terminal, app);

    app.search.shutdown();

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let wait = app
            .search
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_WAIT);

        match app.event_rx.recv_timeout(wait) {
            Ok(AppEvent::ExitApplication) => break,
            Ok(AppEvent::FatalError(message)) => {
                error!(%message, "fatal error");
                bail!(message);
            }
            Ok(event) => handle_event(app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if app.search.poll(Instant::now(), &app.task_tx)? {
            debug!("debounced search issued");
            app.search_view.results.reset();
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Paste(text) => process_paste(app, &text),
        AppEvent::SearchCompleted(completion) => handle_search_completed(app, completion),
        AppEvent::SongSelected(song) => handle_song_selected(app, song),
        AppEvent::ScanStarted => handle_scan_started(app),
        AppEvent::ScanFinished(count) => handle_scan_finished(app, count),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    Ok(())
}
