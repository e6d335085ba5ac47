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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Drawing reads the application state and nothing
//! else, so the screen always reflects the last successful listing.

mod composer;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, StatusLine, render::composer::draw_composer, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header line, the track table, the composer bar
/// and a one-line status footer.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let theme = app.theme;
    app.track_table.as_widget().draw(f, outer[1], &theme);

    draw_composer(f, outer[2], app);

    draw_status(f, outer[3], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner = header_block.inner(area);
    f.render_widget(header_block, area);

    let hints = "a add  d delete  Enter inspect  r refresh  q quit";
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints.len() as u16)])
        .split(inner);

    let title = format!("Tracks | {} tracks", app.track_table.tracks.len());
    f.render_widget(
        Paragraph::new(title).style(Style::default().fg(app.theme.accent_colour)),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(Style::default().fg(app.theme.hint_fg)),
        chunks[1],
    );
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .horizontal_margin(1)
        .split(area);

    let (text, colour) = match &app.status {
        Some(StatusLine::Info(message)) => (message.as_str(), app.theme.status_info_fg),
        Some(StatusLine::Error(message)) => (message.as_str(), app.theme.status_error_fg),
        None => ("", app.theme.status_info_fg),
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour)),
        container[0],
    );

    if app.in_flight > 0 {
        f.render_widget(
            Paragraph::new("working…")
                .alignment(Alignment::Right)
                .style(Style::default().fg(app.theme.hint_fg)),
            container[1],
        );
    }
}
