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

//! Playback control and state management.
//!
//! This module provides the [`Playback`] state machine used by the session to
//! track the loaded video. Playing is purely a logical transition, nothing is
//! decoded or rendered.
//!
//! Every transition either succeeds or returns a [`PlaybackError`] and leaves
//! the state exactly as it was.

use crate::{error::PlaybackError, model::Video};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// The loaded video and its playback status.
///
/// The loaded video is kept after a stop, but it is only reported as playing
/// while the state is not [`PlayerState::Stopped`].
#[derive(Debug, Clone)]
pub(crate) struct Playback {
    state: PlayerState,
    loaded: Option<Video>,
}

impl Playback {
    pub(crate) fn new() -> Self {
        Self {
            state: PlayerState::Stopped,
            loaded: None,
        }
    }

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    /// The video that is playing or paused, if any.
    pub(crate) fn current(&self) -> Option<&Video> {
        match self.state {
            PlayerState::Stopped => None,
            PlayerState::Playing | PlayerState::Paused => self.loaded.as_ref(),
        }
    }

    /// Loads and starts a video, clearing any pause.
    ///
    /// Returns the video that had to be stopped first, if one was playing or
    /// paused. Loading the video that is already playing restarts it.
    pub(crate) fn play(&mut self, video: Video) -> Option<Video> {
        let stopped = match self.state {
            PlayerState::Stopped => None,
            PlayerState::Playing | PlayerState::Paused => self.loaded.take(),
        };

        tracing::debug!(id = %video.id, "Playback started");

        self.loaded = Some(video);
        self.state = PlayerState::Playing;

        stopped
    }

    /// Stops the current video and returns it.
    pub(crate) fn stop(&mut self) -> Result<Video, PlaybackError> {
        let video = self.current().cloned().ok_or(PlaybackError::NothingPlaying)?;
        self.state = PlayerState::Stopped;

        tracing::debug!(id = %video.id, "Playback stopped");

        Ok(video)
    }

    pub(crate) fn pause(&mut self) -> Result<Video, PlaybackError> {
        let video = self.current().cloned().ok_or(PlaybackError::NothingPlaying)?;

        if self.state == PlayerState::Paused {
            return Err(PlaybackError::AlreadyPaused(video.title));
        }

        self.state = PlayerState::Paused;
        Ok(video)
    }

    pub(crate) fn resume(&mut self) -> Result<Video, PlaybackError> {
        let video = self.current().cloned().ok_or(PlaybackError::NothingPlaying)?;

        if self.state != PlayerState::Paused {
            return Err(PlaybackError::NotPaused);
        }

        self.state = PlayerState::Playing;
        Ok(video)
    }
}
