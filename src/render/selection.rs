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
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::App;

/// Draws the song most recently picked from the results.
pub(crate) fn draw_selection(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.panel_colour));

    let lines = match &app.current_song {
        Some(song) => {
            let artists = song
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            vec![
                Line::from(vec![
                    Span::styled(
                        song.song_name.as_str(),
                        Style::default().fg(theme.table_track_fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(artists, Style::default().fg(theme.table_artist_fg)),
                ]),
                Line::from(vec![
                    Span::styled(
                        song.album_name.as_str(),
                        Style::default().fg(theme.table_album_fg),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        song.album_art.as_deref().unwrap_or("no album art"),
                        Style::default().fg(theme.muted_colour),
                    ),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(theme.muted_colour),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
