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
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::SearchView,
    render::Render,
    search::{RenderState, Search},
    theme::Theme,
};

impl SearchView {
    /// Draws the input line and, beneath it, the current render state.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, search: &Search, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_input(f, chunks[0], search, theme);
        self.draw_results(f, chunks[1], search, theme);
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, search: &Search, theme: &Theme) {
        let controller = search.input();
        let focused = controller.is_focused();

        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search ")
            .title_bottom(Line::from(" esc ✕ ").alignment(Alignment::Right));

        // Keep the cursor in view when the text is wider than the box
        let width = area.width.saturating_sub(2).max(1) as usize;
        let scroll = controller.input().visual_scroll(width);

        let input = Paragraph::new(controller.value())
            .style(Style::default().fg(theme.table_track_fg))
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
            .block(block);

        f.render_widget(input, area);

        if focused {
            let offset = controller.input().visual_cursor().saturating_sub(scroll);
            let cursor_x = area.x + 1 + u16::try_from(offset).unwrap_or(0);
            let cursor_y = area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, search: &Search, theme: &Theme) {
        let inner = Block::default().padding(Padding::horizontal(1)).inner(area);

        let message = match search.render_state() {
            RenderState::Idle => return,
            RenderState::Results { items } => {
                self.results.as_widget(items).draw(f, inner, theme);
                return;
            }
            RenderState::Loading { term } => Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(theme.loading_colour)),
                Span::raw(" "),
                Span::styled(
                    format!("Searching for {}...", term),
                    Style::default().fg(theme.muted_colour),
                ),
            ]),
            RenderState::Empty => Line::from(Span::styled(
                "No content to display.",
                Style::default().fg(theme.muted_colour),
            )),
            RenderState::Failed => Line::from(Span::styled(
                "Search failed. See the log for details.",
                Style::default().fg(theme.error_colour),
            )),
        };

        f.render_widget(Paragraph::new(message), inner);
    }
}
