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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of the track catalog. Rows
//! follow the order of the last server listing, one row per track.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::TrackTable, render::Render, theme::Theme};

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|track| {
            Row::new(vec![
                Cell::from(
                    Line::from(track.id.as_str())
                        .style(Style::default().fg(theme.table_id_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(track.attrs.title.as_str())
                        .style(Style::default().fg(theme.table_title_fg)),
                ),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(0)])
            .header(
                Row::new(vec![
                    Cell::from(Line::from("Id").alignment(Alignment::Right)),
                    Cell::from("Title"),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
