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

//! Playlist management.
//!
//! This module provides the set of named playlists owned by a session. Names
//! are matched ignoring case but displayed as first given.

use std::collections::BTreeMap;

use crate::{
    error::PlayerError,
    model::{Playlist, playlist_key},
};

#[derive(Debug, Default)]
pub(crate) struct Playlists {
    // Keyed by lowercased name, so iteration is already in display order.
    playlists: BTreeMap<String, Playlist>,
}

impl Playlists {
    pub(crate) fn new() -> Self {
        Self {
            playlists: BTreeMap::new(),
        }
    }

    pub(crate) fn create(&mut self, name: &str) -> Result<&Playlist, PlayerError> {
        let key = playlist_key(name);

        if self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistAlreadyExists(name.to_string()));
        }

        let playlist = self.playlists.entry(key).or_insert_with(|| Playlist::new(name));
        Ok(&*playlist)
    }

    pub(crate) fn get(&self, name: &str) -> Result<&Playlist, PlayerError> {
        self.playlists
            .get(&playlist_key(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlayerError> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    pub(crate) fn delete(&mut self, name: &str) -> Result<Playlist, PlayerError> {
        self.playlists
            .remove(&playlist_key(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }
}
