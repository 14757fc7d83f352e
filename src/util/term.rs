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

//! Terminal environment and styling utilities.
//!
//! This module changes terminal emulator properties, such as the background
//! colour, using OSC (Operating System Command) escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences. Write failures are ignored, a wrong background is cosmetic.

use std::io::{self, Write};

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_colour` - A string slice representing the colour (e.g., `"#1e1e1e"`).
///
/// # Note
///
/// This function flushes `stdout` immediately so the change is applied
/// before the alternate screen is entered.
pub(crate) fn set_terminal_bg(hex_colour: &str) {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_colour).ok();
    stdout.flush().ok();
}

/// Resets the terminal background to its default colour.
///
/// This sends the OSC 111 escape sequence, which instructs the terminal to
/// revert the background colour to the user's original configuration.
///
/// # Note
///
/// This is called during terminal restoration, including after an error.
pub(crate) fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07").ok();
    stdout.flush().ok();
}
