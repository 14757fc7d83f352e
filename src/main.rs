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

//! # tunefind
//!
//! A terminal search box for a local music catalog.
//!
//! Typing into the search line issues a catalog search once the input has
//! been quiet for a short delay. Only the answer to the most recent search
//! is ever shown. Picking a result records it as the current selection.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all search
//!   state and renders the UI.
//! * A **Background Worker** owns the catalog database and answers search
//!   and rescan tasks.
//! * **Input and Tick Threads** feed key presses and periodic redraws into
//!   the main event loop.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod catalog;
mod components;
mod config;
mod db;
mod error;
mod events;
mod logging;
mod model;
mod render;
mod search;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    components::SearchView,
    config::AppConfig,
    events::{AppEvent, process_events},
    model::SelectedSong,
    search::Search,
    tasks::AppTask,
    theme::Theme,
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// A message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl StatusLine {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub search: Search,
    pub search_view: SearchView,

    pub current_song: Option<SelectedSong>,
    pub status: Option<StatusLine>,
    pub scanning: bool,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let status = if config.media_dirs.is_empty() {
            StatusLine::info("No media directories configured")
        } else {
            StatusLine::info("Press Ctrl+R to scan the media directories")
        };

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            search: Search::new(),
            search_view: SearchView::new(),
            current_song: None,
            status: Some(status),
            scanning: false,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part
/// of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    logging::init_tracing(&config.log_file).context("Failed to initialise logging")?;
    logging::install_panic_hook();

    info!(
        database = %config.database_file,
        media_dirs = config.media_dirs.len(),
        "starting"
    );

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker that owns the catalog and processes [`AppTask`]s.
/// * An input thread to poll for keyboard and paste events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(event::Event::Key(key)) => AppEvent::Key(key),
                Ok(event::Event::Paste(text)) => AppEvent::Paste(text),
                _ => continue,
            };

            if tx_keys.send(app_event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this keeps
    // the loading spinner moving.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
