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

//! Session error types.
//!
//! Every error here is recoverable: a failed operation leaves the session
//! untouched and the caller reports the message. The messages carry only the
//! reason, the dispatcher prefixes them with the operation that failed (for
//! example `Cannot play video: Video does not exist`).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound(String),

    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    #[error("A playlist with the same name already exists")]
    PlaylistAlreadyExists(String),

    #[error("Video already added")]
    VideoAlreadyInPlaylist(String),

    #[error("Video is not in playlist")]
    VideoNotInPlaylist(String),

    #[error(transparent)]
    InvalidPlaybackState(#[from] PlaybackError),

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: String, reason: String },

    #[error("Video is already flagged")]
    VideoAlreadyFlagged(String),

    #[error("Video is not flagged")]
    VideoNotFlagged(String),

    #[error("No videos available")]
    NoVideosAvailable,
}

/// Why a playback action was refused in the current [`crate::player::PlayerState`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    /// Carries the title of the paused video.
    #[error("Video already paused: {0}")]
    AlreadyPaused(String),
}
