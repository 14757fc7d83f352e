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

//! Key handling for the search view.
//!
//! While the input line has focus keys edit the text; `Esc` clears it and
//! `Down`, `Tab` or `Enter` move into the results. While the results have
//! focus keys drive the table, `Enter` picks the highlighted item and
//! `Esc`, `Tab` or `/` go back to the input.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{SearchView, SelectionDelegate, TrackTableAction},
    model::SelectedSong,
    search::{RenderState, Search},
    tasks::AppTask,
};

impl SearchView {
    /// Routes a key to the input line or to the results table, depending on
    /// which has focus.
    ///
    /// # Arguments
    ///
    /// * `search` - The search state the keys act on.
    /// * `task_tx` - Used by `Esc`, which issues the empty search at once.
    /// * `delegate` - Receives the song picked with `Enter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleared search cannot be sent to the worker.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        search: &mut Search,
        task_tx: &Sender<AppTask>,
        delegate: &dyn SelectionDelegate,
    ) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        if search.input().is_focused() {
            match key_event.code {
                KeyCode::Esc => {
                    search.clear(task_tx)?;
                    self.results.reset();
                }
                KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.focus_results(search),
                _ => {
                    search.handle_input_event(event, Instant::now());
                }
            }

            return Ok(());
        }

        if matches!(key_event.code, KeyCode::Esc | KeyCode::Tab | KeyCode::Char('/')) {
            search.input_mut().set_focused(true);
            return Ok(());
        }

        let RenderState::Results { items } = search.render_state() else {
            search.input_mut().set_focused(true);
            return Ok(());
        };

        match self.results.as_widget(items).process_event(event) {
            Some(TrackTableAction::Activate(index)) => {
                if let Some(item) = items.get(index) {
                    delegate.on_item_selected(SelectedSong::from(item));
                }
            }
            Some(TrackTableAction::LeaveTop) => search.input_mut().set_focused(true),
            None => {}
        }

        Ok(())
    }

    /// Moves focus into the results, when there are any to move into.
    fn focus_results(&mut self, search: &mut Search) {
        if let RenderState::Results { items } = search.render_state() {
            if !items.is_empty() {
                self.results.reset();
                self.results.table_state.select(Some(0));
                search.input_mut().set_focused(false);
            }
        }
    }
}
