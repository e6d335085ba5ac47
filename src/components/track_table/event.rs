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

//! Input handling and event processing for the track table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! row-level actions.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackTableAction> {
        // Internal events
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                KeyCode::Char('g') => self.goto_first(),
                KeyCode::Char('G') => self.goto_last(),
                _ => {}
            },

            _ => {}
        }

        // External events that result in a table action
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('d') | KeyCode::Delete => self
                    .selected_track()
                    .map(|t| TrackTableAction::DeleteTrack(t.id.clone())),

                KeyCode::Enter => self
                    .selected_track()
                    .map(|t| TrackTableAction::InspectTrack(t.id.clone())),

                _ => None,
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use crate::{
        components::TrackTableState,
        model::{Track, TrackAttrs, TrackId},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn listing() -> Vec<Track> {
        ["Song A", "Song B"]
            .iter()
            .enumerate()
            .map(|(i, title)| Track {
                id: TrackId::from(i as u64 + 1),
                attrs: TrackAttrs {
                    title: (*title).to_owned(),
                },
            })
            .collect()
    }

    #[test]
    fn delete_reports_the_cursor_rows_typed_id() {
        let mut state = TrackTableState::new();
        state.set_tracks(listing());

        let mut table = state.as_widget();
        table.process_event(&key(KeyCode::Down));
        let action = table.process_event(&key(KeyCode::Char('d')));

        assert_eq!(
            action,
            Some(TrackTableAction::DeleteTrack(TrackId::from("2")))
        );
    }

    #[test]
    fn delete_on_an_empty_listing_does_nothing() {
        let mut state = TrackTableState::new();

        let action = state.as_widget().process_event(&key(KeyCode::Char('d')));

        assert_eq!(action, None);
    }

    #[test]
    fn enter_inspects_the_cursor_row() {
        let mut state = TrackTableState::new();
        state.set_tracks(listing());

        let action = state.as_widget().process_event(&key(KeyCode::Enter));

        assert_eq!(
            action,
            Some(TrackTableAction::InspectTrack(TrackId::from("1")))
        );
    }
}
