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

//! HTTP client for the track API.
//!
//! The remote catalog exposes a small JSON resource collection under
//! `/api/tracks/`. This module wraps it in the [`TrackStore`] trait so the
//! command worker can be driven by an in-memory store in tests, with
//! [`ApiClient`] as the real implementation backed by a blocking `reqwest`
//! client.

mod wire;

use std::time::Duration;

use reqwest::{StatusCode, Url, blocking};
use thiserror::Error;

use crate::{
    api::wire::{DataResponse, ErrorResponse, NewTrackRequest},
    model::{Track, TrackAttrs, TrackId},
};

const TRACKS_PATH: &str = "api/tracks/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),

    #[error("track not found")]
    NotFound,

    #[error("{title} (http {status})")]
    Server { status: u16, title: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Access to the track catalog.
///
/// Mirrors the resource operations of the remote collection: list, fetch one,
/// create, delete.
pub(crate) trait TrackStore {
    fn all_tracks(&self) -> Result<Vec<Track>, ApiError>;

    fn track_by_id(&self, id: &TrackId) -> Result<Track, ApiError>;

    fn create_track(&self, attrs: TrackAttrs) -> Result<Track, ApiError>;

    fn delete_track(&self, id: &TrackId) -> Result<(), ApiError>;
}

pub(crate) struct ApiClient {
    http: blocking::Client,
    tracks_url: Url,
}

impl ApiClient {
    /// Creates a client for the track collection rooted at `base_url`.
    pub(crate) fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        // A relative join drops the last segment of a slash-less path, so a
        // prefix like "http://host/muzik" must gain its trailing slash first
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let tracks_url = base
            .join(TRACKS_PATH)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http = blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, tracks_url })
    }

    fn track_url(&self, id: &TrackId) -> Result<Url, ApiError> {
        self.tracks_url
            .join(id.as_str())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// Turns a non-success response into an error, preferring the server's
    /// own error document when it provides one.
    fn check(response: blocking::Response) -> Result<blocking::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let title = response
            .json::<ErrorResponse>()
            .ok()
            .and_then(|body| body.errors.into_iter().next())
            .map(|error| error.message())
            .unwrap_or_else(|| "request rejected by the server".to_owned());

        Err(ApiError::Server {
            status: status.as_u16(),
            title,
        })
    }
}

impl TrackStore for ApiClient {
    fn all_tracks(&self) -> Result<Vec<Track>, ApiError> {
        let response = self.http.get(self.tracks_url.clone()).send()?;
        let listing: DataResponse<Vec<Track>> = Self::check(response)?.json()?;

        Ok(listing.data)
    }

    fn track_by_id(&self, id: &TrackId) -> Result<Track, ApiError> {
        let response = self.http.get(self.track_url(id)?).send()?;
        let track: DataResponse<Track> = Self::check(response)?.json()?;

        Ok(track.data)
    }

    fn create_track(&self, attrs: TrackAttrs) -> Result<Track, ApiError> {
        let response = self
            .http
            .post(self.tracks_url.clone())
            .json(&NewTrackRequest::new(attrs.title))
            .send()?;
        let track: DataResponse<Track> = Self::check(response)?.json()?;

        Ok(track.data)
    }

    fn delete_track(&self, id: &TrackId) -> Result<(), ApiError> {
        let response = self.http.delete(self.track_url(id)?).send()?;
        Self::check(response)?;

        Ok(())
    }
}
