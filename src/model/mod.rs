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
//! This module defines the central entities of the application, the videos
//! held by the catalog and the playlists a user builds from them.

use std::fmt;

/// A single catalog entry.
///
/// Videos are created once when the catalog is loaded and never change
/// afterwards, the identifier is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Whether any tag matches `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Renders the descriptor form of a video, `Title (id) [tag1 tag2]`.
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// A named, ordered, duplicate-free list of video identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            video_ids: Vec::new(),
        }
    }

    /// The name exactly as given when the playlist was created.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub(crate) fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    pub(crate) fn push(&mut self, video_id: &str) {
        self.video_ids.push(video_id.to_string());
    }

    pub(crate) fn remove(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(idx) => {
                self.video_ids.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }
}

/// Lookup key for a playlist name.
pub(crate) fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}
