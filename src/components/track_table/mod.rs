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

//! Track table widget.
//!
//! A cursor over a borrowed slice of catalog items. The state (the cursor)
//! outlives any one result set; the widget is rebuilt around the current
//! items every time it is used.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{CatalogItem, SelectedSong};

/// Receives the item the user picked from the table.
pub(crate) trait SelectionDelegate {
    fn on_item_selected(&self, song: SelectedSong);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    Activate(usize),
    LeaveTop,
}

#[derive(Debug, Default)]
pub(crate) struct TrackTableState {
    pub(crate) table_state: TableState,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, items: &'a [CatalogItem]) -> TrackTable<'a> {
        TrackTable {
            items,
            table_state: &mut self.table_state,
        }
    }

    /// Drops the cursor, used whenever a new result set arrives.
    pub(crate) fn reset(&mut self) {
        self.table_state = TableState::new();
    }
}

/// The table widget, borrowing the items to show and the cursor to move.
pub(crate) struct TrackTable<'a> {
    items: &'a [CatalogItem],
    table_state: &'a mut TableState,
}

impl<'a> TrackTable<'a> {
    /// Moves down one row, stopping on the last. With no cursor yet the
    /// first row is selected.
    pub(crate) fn goto_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Moves up one row. Returns `false` when already on the first row.
    pub(crate) fn goto_previous(&mut self) -> bool {
        match self.table_state.selected() {
            Some(0) | None => false,
            Some(i) => {
                self.table_state.select(Some(i - 1));
                true
            }
        }
    }

    pub(crate) fn goto_first(&mut self) {
        if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn goto_last(&mut self) {
        if !self.items.is_empty() {
            self.table_state.select(Some(self.items.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artist;

    fn items(n: usize) -> Vec<CatalogItem> {
        (0..n)
            .map(|i| CatalogItem {
                id: i.to_string(),
                title: format!("Track {i}"),
                artists: vec![Artist { id: 1, name: "Floating Points".into() }],
                album_name: "Crush".into(),
                album_art: None,
                duration: 180,
            })
            .collect()
    }

    #[test]
    fn navigation_stays_within_bounds() {
        let items = items(3);
        let mut state = TrackTableState::new();
        let mut table = state.as_widget(&items);

        table.goto_next();
        table.goto_next();
        table.goto_next();
        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(2));

        assert!(table.goto_previous());
        table.goto_first();
        assert!(!table.goto_previous());
        table.goto_last();
        assert_eq!(state.table_state.selected(), Some(2));
    }

    #[test]
    fn empty_table_has_no_cursor() {
        let items = items(0);
        let mut state = TrackTableState::new();
        let mut table = state.as_widget(&items);

        table.goto_next();
        table.goto_last();
        assert_eq!(state.table_state.selected(), None);
    }
}
