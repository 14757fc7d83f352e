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

//! Keyboard routing.
//!
//! A few keys are global. Everything else belongs to the search view, which
//! decides between editing the input line and driving the results table.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{App, events::AppEvent, tasks::AppTask};

/// Maps keyboard input to application actions.
///
/// * **Application Control**: `Ctrl+C` anywhere, or `q` while the results
///   have focus, exits.
/// * **Catalog**: `Ctrl+R` rescans the media directories unless a scan is
///   already running.
/// * **Search**: anything else goes to the search view.
///
/// # Errors
///
/// Returns an error if a task or event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            if app.scanning {
                debug!("scan already running");
            } else {
                app.task_tx.send(AppTask::ScanCatalog)?;
                // Set now, the worker's ScanStarted may be queued behind searches
                app.scanning = true;
            }
        }

        (KeyCode::Char('q'), _) if !app.search.input().is_focused() => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {
            let event = Event::Key(key);
            app.search_view
                .process_event(&event, &mut app.search, &app.task_tx, &app.event_tx)?;
        }
    }

    Ok(())
}

/// Appends pasted text to the search line as a single change. Line breaks
/// are dropped since the search line holds one line.
pub(super) fn process_paste(app: &mut App, text: &str) {
    if !app.search.input().is_focused() {
        return;
    }

    let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
    if pasted.is_empty() {
        return;
    }

    let value = format!("{}{}", app.search.input().value(), pasted);
    app.search.on_change(&value, Instant::now());
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::config::AppConfig;

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_is_typed_while_the_input_has_focus() {
        let (mut app, _rx) = app();

        process_key_event(&mut app, press(KeyCode::Char('q'))).unwrap();

        assert_eq!(app.search.input().value(), "q");
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn ctrl_c_exits() {
        let (mut app, _rx) = app();

        process_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::ExitApplication)
        ));
    }

    #[test]
    fn rescan_is_not_queued_twice() {
        let (mut app, rx) = app();
        let rescan = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        // Both presses land before the worker reports the scan as started
        process_key_event(&mut app, rescan).unwrap();
        process_key_event(&mut app, rescan).unwrap();

        assert!(app.scanning);
        assert!(matches!(rx.try_recv(), Ok(AppTask::ScanCatalog)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn paste_is_one_change_without_line_breaks() {
        let (mut app, _rx) = app();

        process_key_event(&mut app, press(KeyCode::Char('a'))).unwrap();
        process_paste(&mut app, "ir\r\n");

        assert_eq!(app.search.input().value(), "air");
    }

    #[test]
    fn paste_is_ignored_while_the_results_have_focus() {
        let (mut app, _rx) = app();
        app.search.input_mut().set_focused(false);

        process_paste(&mut app, "moon safari");

        assert_eq!(app.search.input().value(), "");
    }

    #[test]
    fn key_releases_are_ignored() {
        let (mut app, _rx) = app();
        let mut release = press(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;

        process_key_event(&mut app, release).unwrap();

        assert_eq!(app.search.input().value(), "");
    }
}
