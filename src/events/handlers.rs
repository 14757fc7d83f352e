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

use tracing::{info, warn};

use crate::{
    App, StatusLine,
    model::{SelectedSong, search::SearchCompletion},
};

/// Commits a completion if it belongs to the current search. New results get
/// a fresh cursor and the input keeps focus.
pub(super) fn handle_search_completed(app: &mut App, completion: SearchCompletion) {
    if app.search.complete(completion) {
        app.search_view.results.reset();
        app.search.input_mut().set_focused(true);
    }
}

pub(super) fn handle_song_selected(app: &mut App, song: SelectedSong) {
    info!(id = %song.id, song = %song.song_name, album = %song.album_name, "song selected");
    app.current_song = Some(song);
}

pub(super) fn handle_scan_started(app: &mut App) {
    app.scanning = true;
    app.status = Some(StatusLine::info("Scanning media directories..."));
}

pub(super) fn handle_scan_finished(app: &mut App, count: u64) {
    app.scanning = false;
    app.status = Some(StatusLine::info(format!("Catalog holds {} tracks", count)));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "background task reported an error");
    app.scanning = false;
    app.status = Some(StatusLine::error(message));
}

pub(super) fn handle_tick(app: &mut App) {
    app.search_view.tick();
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, Receiver},
        time::{Duration, Instant},
    };

    use super::*;
    use crate::{
        config::AppConfig,
        model::{
            Artist, CatalogItem,
            search::{CatalogResponse, SearchRequest},
        },
        search::RenderState,
        tasks::AppTask,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn issue(app: &mut App, rx: &Receiver<AppTask>, term: &str) -> SearchRequest {
        let now = Instant::now();
        app.search.on_change(term, now);
        app.search
            .poll(now + Duration::from_millis(300), &app.task_tx)
            .unwrap();

        match rx.try_recv() {
            Ok(AppTask::Search(request)) => request,
            other => panic!("expected a search request, got {other:?}"),
        }
    }

    fn items(title: &str) -> Vec<CatalogItem> {
        vec![CatalogItem {
            id: title.to_lowercase(),
            title: title.into(),
            artists: vec![Artist { id: 1, name: "Bonobo".into() }],
            album_name: "Migration".into(),
            album_art: None,
            duration: 301,
        }]
    }

    #[test]
    fn stale_completion_leaves_the_view_untouched() {
        let (mut app, rx) = app();

        let first = issue(&mut app, &rx, "bono");
        let second = issue(&mut app, &rx, "bonobo");

        handle_search_completed(
            &mut app,
            SearchCompletion {
                generation: second.generation,
                result: Ok(CatalogResponse::with_items(items("Kerala"))),
            },
        );
        handle_search_completed(
            &mut app,
            SearchCompletion {
                generation: first.generation,
                result: Ok(CatalogResponse::with_items(items("Cirrus"))),
            },
        );

        let RenderState::Results { items } = app.search.render_state() else {
            panic!("expected results");
        };
        assert_eq!(items[0].title, "Kerala");
    }

    #[test]
    fn selected_song_becomes_current() {
        let (mut app, _rx) = app();
        let items = items("Kerala");

        handle_song_selected(&mut app, SelectedSong::from(&items[0]));

        assert_eq!(
            app.current_song.as_ref().map(|s| s.song_name.as_str()),
            Some("Kerala")
        );
    }

    #[test]
    fn scan_progress_is_reported_on_the_status_line() {
        let (mut app, _rx) = app();

        handle_scan_started(&mut app);
        assert!(app.scanning);

        handle_scan_finished(&mut app, 1204);
        assert!(!app.scanning);
        assert_eq!(
            app.status,
            Some(StatusLine::info("Catalog holds 1204 tracks"))
        );
    }

    #[test]
    fn errors_end_a_scan_and_show_in_red() {
        let (mut app, _rx) = app();

        handle_scan_started(&mut app);
        handle_error(&mut app, "media directory missing".into());

        assert!(!app.scanning);
        assert_eq!(
            app.status,
            Some(StatusLine::error("media directory missing"))
        );
    }
}
