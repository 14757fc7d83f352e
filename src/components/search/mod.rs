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

//! The search view.
//!
//! Presents the search box: the input line on top and, below it, whatever
//! the current [`RenderState`](crate::search::RenderState) calls for. The
//! view owns only presentation state (the results cursor and the spinner);
//! the text and the results themselves belong to [`Search`](crate::search::Search).

mod event;
mod render;

use crate::components::TrackTableState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Presentation state of the search box.
pub(crate) struct SearchView {
    pub(crate) results: TrackTableState,
    spinner_frame: usize,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            results: TrackTableState::new(),
            spinner_frame: 0,
        }
    }

    /// Advances the loading spinner.
    pub(crate) fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
