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

//! The search input line.
//!
//! Holds the raw text exactly as typed. Editing keys are decoded by
//! `tui_input`; the controller only reports whether the text changed so that
//! cursor movement does not start a search.

use crossterm::event::Event;
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug)]
pub(crate) struct InputController {
    input: Input,
    focused: bool,
}

impl InputController {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focused: true,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn input(&self) -> &Input {
        &self.input
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Replaces the text with `raw` immediately and unconditionally.
    pub(crate) fn on_change(&mut self, raw: &str) {
        self.input = Input::new(raw.to_string());
    }

    /// Applies an editing key. Returns the new text when the key changed it.
    pub(crate) fn handle_event(&mut self, event: &Event) -> Option<&str> {
        let before = self.input.value().to_string();
        self.input.handle_event(event);

        if self.input.value() != before {
            Some(self.input.value())
        } else {
            None
        }
    }

    /// Empties the text and takes focus back.
    pub(crate) fn clear(&mut self) {
        self.input.reset();
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_reports_the_new_value() {
        let mut input = InputController::new();

        assert_eq!(input.handle_event(&key(KeyCode::Char('a'))), Some("a"));
        assert_eq!(input.handle_event(&key(KeyCode::Char('b'))), Some("ab"));
        assert_eq!(input.handle_event(&key(KeyCode::Backspace)), Some("a"));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn cursor_movement_is_not_a_change() {
        let mut input = InputController::new();
        input.on_change("abc");

        assert_eq!(input.handle_event(&key(KeyCode::Left)), None);
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn clear_empties_and_refocuses() {
        let mut input = InputController::new();
        input.on_change("song");
        input.set_focused(false);

        input.clear();

        assert_eq!(input.value(), "");
        assert!(input.is_focused());
    }
}
