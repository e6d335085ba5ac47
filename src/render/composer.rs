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

//! Render the new-track composer bar.
//!
//! This module renders the visual representation of the composer, the
//! current title text, the cursor and so on.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const LABEL: &str = "Title: ";

pub(crate) fn draw_composer(f: &mut Frame, area: Rect, app: &App) {
    let composer = &app.composer;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL.len() as u16), Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let label_colour = if composer.active() {
        app.theme.accent_colour
    } else {
        app.theme.hint_fg
    };
    f.render_widget(
        Paragraph::new(LABEL).style(Style::default().fg(label_colour)),
        container[0],
    );

    f.render_widget(
        Paragraph::new(composer.input.value()).style(
            Style::default()
                .fg(app.theme.composer_fg)
                .bg(app.theme.composer_bg),
        ),
        container[1],
    );

    if composer.active() {
        let cursor_x = container[1].x + composer.input.visual_cursor() as u16;
        let cursor_y = container[1].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
