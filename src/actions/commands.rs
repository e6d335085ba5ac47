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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppCommand`] requests into calls against the track API and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Commands are handled strictly in arrival order on a single worker, so a
//! burst of overlapping gestures resolves to whichever refresh completes
//! last, and a failed write never triggers the refresh that would normally
//! follow it.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    api::{ApiClient, TrackStore},
    config::AppConfig,
    model::{TrackAttrs, TrackId},
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// Re-fetch the full track listing.
    RefreshTracks,

    /// Create a track with the given title, then re-fetch the listing.
    /// The title is submitted verbatim, empty titles included.
    CreateTrack(String),

    /// Delete a track by its server-typed id, then re-fetch the listing.
    DeleteTrack(TrackId),

    /// Fetch a single track to show its current server-side state.
    InspectTrack(TrackId),
}

/// Spawns a background thread to process application commands.
///
/// The worker owns its own API client and enters a blocking loop, listening
/// for incoming [`AppCommand`]s. Failures are reported back to the UI as
/// [`AppEvent::Error`]s rather than terminating the worker.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let api_url = config.api_url.clone();

    thread::spawn(move || {
        let store = match ApiClient::new(&api_url) {
            Ok(store) => store,
            Err(e) => {
                let _ = event_tx.send(AppEvent::FatalError(e.to_string()));
                return;
            }
        };

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&store, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// Write commands re-fetch the listing after the write succeeds; an error
/// short-circuits the sequence, so no stale listing is ever broadcast for a
/// failed write.
fn handle_command<S: TrackStore>(
    store: &S,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::RefreshTracks => {
            let tracks = store.all_tracks()?;
            event_tx.send(AppEvent::TracksLoaded(tracks))?;
        }
        AppCommand::CreateTrack(title) => {
            let track = store.create_track(TrackAttrs { title })?;
            let tracks = store.all_tracks()?;

            // The created-notification follows the refreshed listing so the
            // new row is on screen before the composer clears
            event_tx.send(AppEvent::TracksLoaded(tracks))?;
            event_tx.send(AppEvent::TrackCreated(track))?;
        }
        AppCommand::DeleteTrack(id) => {
            store.delete_track(&id)?;
            let tracks = store.all_tracks()?;
            event_tx.send(AppEvent::TracksLoaded(tracks))?;
        }
        AppCommand::InspectTrack(id) => {
            let track = store.track_by_id(&id)?;
            event_tx.send(AppEvent::TrackInspected(track))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        cell::{Cell, RefCell},
        sync::mpsc,
    };

    use crate::{api::ApiError, model::Track};

    /// In-memory stand-in for the remote track collection.
    struct MemStore {
        tracks: RefCell<Vec<Track>>,
        next_id: Cell<u64>,
        list_calls: Cell<u32>,
        fail_writes: bool,
    }

    impl MemStore {
        fn new(titles: &[&str]) -> Self {
            let tracks = titles
                .iter()
                .enumerate()
                .map(|(i, title)| Track {
                    id: TrackId::from(i as u64 + 1),
                    attrs: TrackAttrs {
                        title: (*title).to_owned(),
                    },
                })
                .collect::<Vec<_>>();

            Self {
                next_id: Cell::new(tracks.len() as u64 + 1),
                tracks: RefCell::new(tracks),
                list_calls: Cell::new(0),
                fail_writes: false,
            }
        }

        fn failing_writes(titles: &[&str]) -> Self {
            Self {
                fail_writes: true,
                ..Self::new(titles)
            }
        }
    }

    impl TrackStore for MemStore {
        fn all_tracks(&self) -> Result<Vec<Track>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            Ok(self.tracks.borrow().clone())
        }

        fn track_by_id(&self, id: &TrackId) -> Result<Track, ApiError> {
            self.tracks
                .borrow()
                .iter()
                .find(|t| t.id == *id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }

        fn create_track(&self, attrs: TrackAttrs) -> Result<Track, ApiError> {
            if self.fail_writes {
                return Err(ApiError::Server {
                    status: 500,
                    title: "storage offline".to_owned(),
                });
            }

            let track = Track {
                id: TrackId::from(self.next_id.get()),
                attrs,
            };
            self.next_id.set(self.next_id.get() + 1);
            self.tracks.borrow_mut().push(track.clone());

            Ok(track)
        }

        fn delete_track(&self, id: &TrackId) -> Result<(), ApiError> {
            if self.fail_writes {
                return Err(ApiError::Server {
                    status: 500,
                    title: "storage offline".to_owned(),
                });
            }

            let mut tracks = self.tracks.borrow_mut();
            let before = tracks.len();
            tracks.retain(|t| t.id != *id);

            if tracks.len() == before {
                return Err(ApiError::NotFound);
            }
            Ok(())
        }
    }

    fn run(store: &MemStore, command: AppCommand) -> (Result<()>, Vec<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let result = handle_command(store, command, &event_tx);
        (result, event_rx.try_iter().collect())
    }

    #[test]
    fn refresh_reflects_the_server_listing() {
        let store = MemStore::new(&["Song A", "Song B"]);

        let (result, events) = run(&store, AppCommand::RefreshTracks);

        result.unwrap();
        let [AppEvent::TracksLoaded(tracks)] = events.as_slice() else {
            panic!("expected a single listing event, got {events:?}");
        };
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].attrs.title, "Song A");
        assert_eq!(tracks[1].attrs.title, "Song B");
    }

    #[test]
    fn create_refreshes_before_reporting_the_new_track() {
        let store = MemStore::new(&["Song A"]);

        let (result, events) = run(&store, AppCommand::CreateTrack("Song B".to_owned()));

        result.unwrap();
        let [AppEvent::TracksLoaded(tracks), AppEvent::TrackCreated(track)] = events.as_slice()
        else {
            panic!("expected listing then created, got {events:?}");
        };
        assert_eq!(tracks.len(), 2);
        assert_eq!(track.attrs.title, "Song B");
        assert_eq!(store.list_calls.get(), 1);
    }

    #[test]
    fn create_passes_an_empty_title_through() {
        let store = MemStore::new(&[]);

        let (result, _) = run(&store, AppCommand::CreateTrack(String::new()));

        result.unwrap();
        assert_eq!(store.tracks.borrow()[0].attrs.title, "");
    }

    #[test]
    fn failed_create_short_circuits_the_refresh() {
        let store = MemStore::failing_writes(&["Song A"]);

        let (result, events) = run(&store, AppCommand::CreateTrack("Song B".to_owned()));

        assert!(result.is_err());
        assert!(events.is_empty());
        assert_eq!(store.list_calls.get(), 0);
    }

    #[test]
    fn delete_refreshes_the_listing() {
        let store = MemStore::new(&["Song A", "Song B"]);

        let (result, events) = run(&store, AppCommand::DeleteTrack(TrackId::from(1u64)));

        result.unwrap();
        let [AppEvent::TracksLoaded(tracks)] = events.as_slice() else {
            panic!("expected a single listing event, got {events:?}");
        };
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].attrs.title, "Song B");
    }

    #[test]
    fn deleting_an_unknown_track_leaves_the_listing_alone() {
        let store = MemStore::new(&["Song A"]);

        let (result, events) = run(&store, AppCommand::DeleteTrack(TrackId::from("99")));

        assert!(result.is_err());
        assert!(events.is_empty());
        assert_eq!(store.tracks.borrow().len(), 1);
    }

    #[test]
    fn inspect_reports_the_current_track_state() {
        let store = MemStore::new(&["Song A"]);

        let (result, events) = run(&store, AppCommand::InspectTrack(TrackId::from(1u64)));

        result.unwrap();
        let [AppEvent::TrackInspected(track)] = events.as_slice() else {
            panic!("expected an inspected event, got {events:?}");
        };
        assert_eq!(track.attrs.title, "Song A");
    }
}
