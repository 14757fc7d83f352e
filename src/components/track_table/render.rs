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
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::TrackTable, render::Render, theme::Theme, util::format::format_time};

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.items.iter().map(|item| {
            let duration: u64 = item.duration.try_into().unwrap_or(0);
            let time = format_time(duration);

            let art = if item.album_art.is_some() { "◼" } else { "" };

            Row::new(vec![
                Cell::from(Line::from(art).style(Style::default().fg(theme.accent_colour))),
                Cell::from(
                    Line::from(item.title.as_str())
                        .style(Style::default().fg(theme.table_track_fg)),
                ),
                Cell::from(
                    Line::from(item.artist_names())
                        .style(Style::default().fg(theme.table_artist_fg)),
                ),
                Cell::from(
                    Line::from(item.album_name.as_str())
                        .style(Style::default().fg(theme.table_album_fg)),
                ),
                Cell::from(
                    Line::from(time)
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artists"),
                Cell::from("Album"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
