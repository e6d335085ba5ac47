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

//! JSON envelopes for the track API.
//!
//! Successful responses wrap their payload in a `data` member; rejected
//! requests carry an `errors` array instead. Requests that create a track
//! submit only the track attributes, the server assigns the id.

use serde::{Deserialize, Serialize};

use crate::model::TrackAttrs;

#[derive(Debug, Deserialize)]
pub(crate) struct DataResponse<T> {
    pub(crate) data: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewTrackRequest {
    pub(crate) data: NewTrackData,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewTrackData {
    pub(crate) attributes: TrackAttrs,
}

impl NewTrackRequest {
    pub(crate) fn new(title: String) -> Self {
        Self {
            data: NewTrackData {
                attributes: TrackAttrs { title },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub(crate) errors: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorInfo {
    pub(crate) title: String,

    #[serde(default)]
    pub(crate) detail: Option<String>,
}

impl ErrorInfo {
    /// Flattens the error into a single human-readable message.
    pub(crate) fn message(self) -> String {
        match self.detail {
            Some(detail) => format!("{}: {}", self.title, detail),
            None => self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::model::{Track, TrackId};

    #[test]
    fn listing_responses_decode_in_server_order() {
        let body = json!({
            "data": [
                {"id": "2", "attributes": {"title": "Song B"}},
                {"id": "1", "attributes": {"title": "Song A"}},
            ]
        });

        let listing: DataResponse<Vec<Track>> = serde_json::from_value(body).unwrap();

        assert_eq!(listing.data.len(), 2);
        assert_eq!(listing.data[0].id, TrackId::from("2"));
        assert_eq!(listing.data[1].attrs.title, "Song A");
    }

    #[test]
    fn new_track_requests_carry_only_attributes() {
        let request = NewTrackRequest::new("Song A".to_owned());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"data": {"attributes": {"title": "Song A"}}})
        );
    }

    #[test]
    fn error_responses_flatten_to_a_message() {
        let body = json!({
            "errors": [
                {"status": "500", "title": "Storage failure", "detail": "connection refused"},
            ]
        });

        let response: ErrorResponse = serde_json::from_value(body).unwrap();
        let error = response.errors.into_iter().next().unwrap();

        assert_eq!(error.message(), "Storage failure: connection refused");
    }

    #[test]
    fn error_details_are_optional() {
        let body = json!({"errors": [{"status": "404", "title": "Track not found"}]});

        let response: ErrorResponse = serde_json::from_value(body).unwrap();
        let error = response.errors.into_iter().next().unwrap();

        assert_eq!(error.message(), "Track not found");
    }
}
