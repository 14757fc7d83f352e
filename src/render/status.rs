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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str = "↓ results  ⏎ select  esc clear  ^R rescan  ^C quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(KEY_HINTS.chars().count() as u16)])
        .horizontal_margin(1)
        .split(area);

    let (message, colour) = match &app.status {
        Some(status) if status.is_error => (status.message.as_str(), app.theme.error_colour),
        Some(status) => (status.message.as_str(), app.theme.accent_colour),
        None => ("", app.theme.muted_colour),
    };

    f.render_widget(
        Paragraph::new(message).style(Style::default().fg(colour)),
        container[0],
    );

    f.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(app.theme.muted_colour)),
        container[1],
    );
}
