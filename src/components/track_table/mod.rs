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

//! Interactive track table widget and state management.
//!
//! This module provides the table component for displaying the track catalog.
//! It separates persistent state (`TrackTableState`) from the transient
//! widget view (`TrackTable`), and reports row-level gestures (delete,
//! inspect) as actions for the event loop to act on.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{Track, TrackId};

/// A gesture on the cursor row, carrying the row's server-typed id.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    DeleteTrack(TrackId),
    InspectTrack(TrackId),
}

pub(crate) struct TrackTableState {
    pub(crate) tracks: Vec<Track>,
    pub(crate) table_state: TableState,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the displayed listing wholesale, keeping the cursor on a
    /// valid row where possible.
    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;

        let cursor = match self.table_state.selected() {
            _ if self.tracks.is_empty() => None,
            Some(i) => Some(i.min(self.tracks.len() - 1)),
            None => Some(0),
        };
        self.table_state.select(cursor);
    }

    pub(crate) fn as_widget(&mut self) -> TrackTable<'_> {
        TrackTable {
            tracks: &self.tracks,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct TrackTable<'a> {
    tracks: &'a [Track],
    table_state: &'a mut TableState,
}

impl TrackTable<'_> {
    fn selected_track(&self) -> Option<&Track> {
        self.table_state.selected().and_then(|i| self.tracks.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(self.tracks.len() - 1));
        }
    }
}
