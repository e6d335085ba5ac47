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

//! Domain models and core data structures.
//!
//! This module defines the central entity of the application—the Track—as it
//! appears in the track catalog served by the remote API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// A single entry in the track catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Track {
    pub(crate) id: TrackId,

    #[serde(rename = "attributes")]
    pub(crate) attrs: TrackAttrs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TrackAttrs {
    pub(crate) title: String,
}

/// Server-assigned track identifier.
///
/// Identifiers are opaque to the client and assigned entirely by the server.
/// Depending on the server version they arrive on the wire either as a JSON
/// string or as a bare integer, so both spellings are accepted and the
/// original spelling is retained for use in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TrackId(String);

impl TrackId {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TrackId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TrackIdVisitor;

        impl de::Visitor<'_> for TrackIdVisitor {
            type Value = TrackId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer track id")
            }

            fn visit_str<E: de::Error>(self, id: &str) -> Result<Self::Value, E> {
                Ok(TrackId(id.to_owned()))
            }

            fn visit_u64<E: de::Error>(self, id: u64) -> Result<Self::Value, E> {
                Ok(TrackId(id.to_string()))
            }

            fn visit_i64<E: de::Error>(self, id: i64) -> Result<Self::Value, E> {
                Ok(TrackId(id.to_string()))
            }
        }

        deserializer.deserialize_any(TrackIdVisitor)
    }
}
