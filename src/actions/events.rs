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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker results
//! (the track API), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to the background worker. It is the only writer
//!    of the displayed state.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal, so the screen is always a pure function of the
//!    current state.

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, StatusLine,
    actions::commands::AppCommand,
    components::TrackTableAction,
    composer::ComposerAction,
    model::Track,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A fresh listing from the server; replaces the table wholesale.
    TracksLoaded(Vec<Track>),

    /// A create request completed and the listing above already reflects it.
    TrackCreated(Track),

    /// A single-resource fetch completed.
    TrackInspected(Track),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            event => apply_event(app, event)?,
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single worker or tick event to the application state.
///
/// This is the only writer of the displayed state. Note the composer clears
/// on [`AppEvent::TrackCreated`] alone: the refreshed listing always arrives
/// first, so the new row is on screen before the buffer empties, and a
/// failed create (which emits only [`AppEvent::Error`]) leaves the typed
/// title in place.
fn apply_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::TracksLoaded(tracks) => {
            app.end_request();
            app.status = None;
            app.track_table.set_tracks(tracks);
        }

        AppEvent::TrackCreated(track) => {
            app.composer.reset();
            app.status = Some(StatusLine::Info(format!("Created track {}", track.id)));
        }

        AppEvent::TrackInspected(track) => {
            app.end_request();
            app.status = Some(StatusLine::Info(format!(
                "Track {}: {}",
                track.id, track.attrs.title
            )));
        }

        AppEvent::Error(message) => {
            app.end_request();
            app.status = Some(StatusLine::Error(message));
        }

        AppEvent::FatalError(message) => return Err(anyhow!(message)),

        AppEvent::Tick => {}

        AppEvent::Key(_) | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions and API commands.
///
/// While the composer is focused it consumes all keys; otherwise keys route
/// to global shortcuts and then to the track table.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.composer.active() {
        if let Some(ComposerAction::Submit(title)) = app.composer.process_event(&event) {
            app.dispatch(AppCommand::CreateTrack(title))?;
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('r') => app.dispatch(AppCommand::RefreshTracks)?,

        KeyCode::Char('a') | KeyCode::Char('i') => app.composer.focus(),

        _ => {
            // Bind the action first so the table borrow ends before dispatch
            let action = app.track_table.as_widget().process_event(&event);
            match action {
                Some(TrackTableAction::DeleteTrack(id)) => {
                    app.dispatch(AppCommand::DeleteTrack(id))?;
                }
                Some(TrackTableAction::InspectTrack(id)) => {
                    app.dispatch(AppCommand::InspectTrack(id))?;
                }
                None => {}
            }
        }
    }

    Ok(())
}
