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

//! Video catalog.
//!
//! The catalog is the fixed set of videos known to a session. It is built
//! once, either from the built-in seed or from a catalog file (see [`load`]),
//! and is read-only afterwards so it can be shared between sessions behind an
//! `Arc`.

pub mod load;

use std::collections::HashMap;

pub use load::{CatalogError, load_catalog, parse_catalog};

use crate::model::Video;

const SEED: [(&str, &str, &[&str]); 5] = [
    ("Funny Dogs", "funny_dogs_video_id", &["#dog", "#animal"]),
    ("Amazing Cats", "amazing_cats_video_id", &["#cat", "#animal"]),
    ("Another Cat Video", "another_cat_video_id", &["#cat", "#animal"]),
    ("Life at Google", "life_at_google_video_id", &["#google", "#career"]),
    ("Video about nothing", "nothing_video_id", &[]),
];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// Builds a catalog from a list of videos.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two videos share an identifier.
    pub fn from_videos(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut map = HashMap::with_capacity(videos.len());

        for video in videos {
            if map.contains_key(&video.id) {
                return Err(CatalogError::DuplicateId { id: video.id });
            }
            map.insert(video.id.clone(), video);
        }

        Ok(Self { videos: map })
    }

    /// The built-in catalog used when no catalog file is configured.
    pub fn seeded() -> Self {
        let videos = SEED
            .iter()
            .map(|(title, id, tags)| {
                let video = Video::new(*id, *title, tags.iter().map(|t| t.to_string()).collect());
                (video.id.clone(), video)
            })
            .collect();

        Self { videos }
    }

    pub fn video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    /// Every video in the catalog, in no particular order.
    pub fn all_videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
