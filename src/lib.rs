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

//! # Video playback and playlist manager.
//!
//! An in-memory session that plays videos from a fixed catalog and keeps
//! named playlists of them. Playing is a logical state change only, nothing
//! is decoded.
//!
//! ## Modules
//!
//! * [`catalog`]: The read-only set of known videos and its file loader.
//! * [`session`]: Playback state, playlists and flags for one user.
//! * [`commander`]: Parses text commands.
//! * [`actions`]: Runs commands against a session and renders the results.
//! * [`config`]: Application configuration file.

pub mod actions;
pub mod catalog;
pub mod commander;
pub mod config;
pub mod error;
pub mod model;
pub mod player;
mod playlist;
pub mod session;
mod util;

pub use catalog::{Catalog, CatalogError};
pub use error::{PlaybackError, PlayerError};
pub use model::Video;
pub use player::PlayerState;
pub use session::Session;
