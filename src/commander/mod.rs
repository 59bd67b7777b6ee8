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

//! Command-line input parsing.
//!
//! This module turns one line of user input into a [`Command`]. Command names
//! are matched ignoring case, arguments are whitespace separated and passed
//! through unchanged.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, String),
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all video from the playlist with the given name.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist with the given name.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SHOW_PLAYLIST <playlist_name> - Displays the videos in the playlist with the given name.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_uppercase().as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
        ("NUMBER_OF_VIDEOS", _) => return Err(ParseError::Usage("NUMBER_OF_VIDEOS")),
        ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
        ("SHOW_ALL_VIDEOS", _) => return Err(ParseError::Usage("SHOW_ALL_VIDEOS")),
        ("PLAY", [id]) => Command::Play(id.to_string()),
        ("PLAY", _) => return Err(ParseError::Usage("PLAY <video_id>")),
        ("STOP", []) => Command::Stop,
        ("STOP", _) => return Err(ParseError::Usage("STOP")),
        ("PLAY_RANDOM", []) => Command::PlayRandom,
        ("PLAY_RANDOM", _) => return Err(ParseError::Usage("PLAY_RANDOM")),
        ("PAUSE", []) => Command::Pause,
        ("PAUSE", _) => return Err(ParseError::Usage("PAUSE")),
        ("CONTINUE", []) => Command::Continue,
        ("CONTINUE", _) => return Err(ParseError::Usage("CONTINUE")),
        ("SHOW_PLAYING", []) => Command::ShowPlaying,
        ("SHOW_PLAYING", _) => return Err(ParseError::Usage("SHOW_PLAYING")),

        ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
        ("CREATE_PLAYLIST", _) => return Err(ParseError::Usage("CREATE_PLAYLIST <playlist_name>")),
        ("ADD_TO_PLAYLIST", [name, id]) => Command::AddToPlaylist(name.to_string(), id.to_string()),
        ("ADD_TO_PLAYLIST", _) => {
            return Err(ParseError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"));
        }
        ("REMOVE_FROM_PLAYLIST", [name, id]) => {
            Command::RemoveFromPlaylist(name.to_string(), id.to_string())
        }
        ("REMOVE_FROM_PLAYLIST", _) => {
            return Err(ParseError::Usage("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>"));
        }
        ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
        ("CLEAR_PLAYLIST", _) => return Err(ParseError::Usage("CLEAR_PLAYLIST <playlist_name>")),
        ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),
        ("DELETE_PLAYLIST", _) => return Err(ParseError::Usage("DELETE_PLAYLIST <playlist_name>")),
        ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
        ("SHOW_ALL_PLAYLISTS", _) => return Err(ParseError::Usage("SHOW_ALL_PLAYLISTS")),
        ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
        ("SHOW_PLAYLIST", _) => return Err(ParseError::Usage("SHOW_PLAYLIST <playlist_name>")),

        ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
        ("SEARCH_VIDEOS", _) => return Err(ParseError::Usage("SEARCH_VIDEOS <search_term>")),
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),
        ("SEARCH_VIDEOS_WITH_TAG", _) => {
            return Err(ParseError::Usage("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
        }
        ("FLAG_VIDEO", [id, reason @ ..]) => Command::FlagVideo(id.to_string(), reason.join(" ")),
        ("FLAG_VIDEO", _) => return Err(ParseError::Usage("FLAG_VIDEO <video_id> <flag_reason>")),
        ("ALLOW_VIDEO", [id]) => Command::AllowVideo(id.to_string()),
        ("ALLOW_VIDEO", _) => return Err(ParseError::Usage("ALLOW_VIDEO <video_id>")),

        ("HELP", _) => Command::Help,
        ("EXIT", _) => Command::Exit,

        _ => return Err(ParseError::UnknownCommand(name.to_string())),
    };

    Ok(Some(command))
}
