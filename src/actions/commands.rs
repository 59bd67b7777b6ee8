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

//! Command execution.
//!
//! This module runs a single [`Command`] against the [`Session`] and writes the
//! outcome as report lines. Session errors stop here: each one is rendered
//! with the name of the action that failed and never reaches the caller.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{
    commander::{Command, HELP},
    error::{PlaybackError, PlayerError},
    model::Video,
    session::{PlayOutcome, Session},
    util::format::{format_listing, format_now_playing},
};

pub(crate) const GOODBYE: &str =
    "Video player has now terminated its execution. Thank you and goodbye!";

/// Whether the command loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Orchestrates the execution of a single command.
///
/// `input` is only read by the search commands, which ask which result to
/// play.
///
/// # Errors
///
/// Returns an error only if writing output or reading the search answer
/// fails.
pub fn handle_command<R: BufRead, W: Write>(
    session: &mut Session,
    command: Command,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    tracing::debug!(?command, "Handling command");

    match command {
        Command::NumberOfVideos => {
            writeln!(out, "{} videos in the library", session.video_count())?;
        }
        Command::ShowAllVideos => {
            writeln!(out, "Here's a list of all available videos:")?;
            for listing in session.list_all_videos() {
                writeln!(out, "  {}", format_listing(&listing))?;
            }
        }
        Command::Play(video_id) => match session.play(&video_id) {
            Ok(outcome) => write_play(out, &outcome)?,
            Err(e) => writeln!(out, "Cannot play video: {}", e)?,
        },
        Command::Stop => match session.stop() {
            Ok(video) => writeln!(out, "Stopping video: {}", video.title)?,
            Err(e) => writeln!(out, "Cannot stop video: {}", e)?,
        },
        Command::PlayRandom => match session.play_random() {
            Ok(outcome) => write_play(out, &outcome)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        Command::Pause => match session.pause() {
            Ok(video) => writeln!(out, "Pausing video: {}", video.title)?,
            Err(e @ PlayerError::InvalidPlaybackState(PlaybackError::AlreadyPaused(_))) => {
                writeln!(out, "{}", e)?
            }
            Err(e) => writeln!(out, "Cannot pause video: {}", e)?,
        },
        Command::Continue => match session.continue_video() {
            Ok(video) => writeln!(out, "Continuing video: {}", video.title)?,
            Err(e) => writeln!(out, "Cannot continue video: {}", e)?,
        },
        Command::ShowPlaying => match session.show_playing() {
            Some(now) => writeln!(out, "Currently playing: {}", format_now_playing(&now))?,
            None => writeln!(out, "{}", PlaybackError::NothingPlaying)?,
        },

        Command::CreatePlaylist(name) => match session.create_playlist(&name) {
            Ok(name) => writeln!(out, "Successfully created new playlist: {}", name)?,
            Err(e) => writeln!(out, "Cannot create playlist: {}", e)?,
        },
        Command::AddToPlaylist(name, video_id) => {
            match session.add_to_playlist(&name, &video_id) {
                Ok(video) => writeln!(out, "Added video to {}: {}", name, video.title)?,
                Err(e) => writeln!(out, "Cannot add video to {}: {}", name, e)?,
            }
        }
        Command::RemoveFromPlaylist(name, video_id) => {
            match session.remove_from_playlist(&name, &video_id) {
                Ok(video) => writeln!(out, "Removed video from {}: {}", name, video.title)?,
                Err(e) => writeln!(out, "Cannot remove video from {}: {}", name, e)?,
            }
        }
        Command::ClearPlaylist(name) => match session.clear_playlist(&name) {
            Ok(()) => writeln!(out, "Successfully removed all videos from {}", name)?,
            Err(e) => writeln!(out, "Cannot clear playlist {}: {}", name, e)?,
        },
        Command::DeletePlaylist(name) => match session.delete_playlist(&name) {
            Ok(()) => writeln!(out, "Deleted playlist: {}", name)?,
            Err(e) => writeln!(out, "Cannot delete playlist {}: {}", name, e)?,
        },
        Command::ShowAllPlaylists => {
            let names = session.playlist_names();
            if names.is_empty() {
                writeln!(out, "No playlists exist yet")?;
            } else {
                writeln!(out, "Showing all playlists:")?;
                for name in names {
                    writeln!(out, "  {}", name)?;
                }
            }
        }
        Command::ShowPlaylist(name) => match session.show_playlist(&name) {
            Ok(listings) => {
                writeln!(out, "Showing playlist: {}", name)?;
                if listings.is_empty() {
                    writeln!(out, "  No videos here yet")?;
                }
                for listing in listings {
                    writeln!(out, "  {}", format_listing(&listing))?;
                }
            }
            Err(e) => writeln!(out, "Cannot show playlist {}: {}", name, e)?,
        },

        Command::SearchVideos(term) => {
            let results = session.search_videos(&term);
            offer_results(session, &term, results, input, out)?;
        }
        Command::SearchVideosWithTag(tag) => {
            let results = session.search_videos_tag(&tag);
            offer_results(session, &tag, results, input, out)?;
        }
        Command::FlagVideo(video_id, reason) => match session.flag_video(&video_id, &reason) {
            Ok(outcome) => {
                if let Some(stopped) = outcome.stopped {
                    writeln!(out, "Stopping video: {}", stopped.title)?;
                }
                writeln!(
                    out,
                    "Successfully flagged video: {} (reason: {})",
                    outcome.video.title, outcome.reason
                )?;
            }
            Err(e) => writeln!(out, "Cannot flag video: {}", e)?,
        },
        Command::AllowVideo(video_id) => match session.allow_video(&video_id) {
            Ok(video) => writeln!(out, "Successfully removed flag from video: {}", video.title)?,
            Err(e) => writeln!(out, "Cannot remove flag from video: {}", e)?,
        },

        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Exit => {
            writeln!(out, "{}", GOODBYE)?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

fn write_play<W: Write>(out: &mut W, outcome: &PlayOutcome) -> Result<()> {
    if let Some(stopped) = &outcome.stopped {
        writeln!(out, "Stopping video: {}", stopped.title)?;
    }
    writeln!(out, "Playing video: {}", outcome.playing.title)?;

    Ok(())
}

/// Lists search results and plays the one the user picks by number.
///
/// Anything other than a listed number, including end of input, is taken as
/// a no.
fn offer_results<R: BufRead, W: Write>(
    session: &mut Session,
    term: &str,
    results: Vec<Video>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "No search results for {}", term)?;
        return Ok(());
    }

    writeln!(out, "Here are the results for {}:", term)?;
    for (idx, video) in results.iter().enumerate() {
        writeln!(out, "  {}) {}", idx + 1, video)?;
    }
    writeln!(
        out,
        "Would you like to play any of the above? If yes, specify the number of the video."
    )?;
    writeln!(
        out,
        "If your answer is not a valid number, we will assume it's a no."
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let choice = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| results.get(idx));

    if let Some(video) = choice {
        match session.play(&video.id) {
            Ok(outcome) => write_play(out, &outcome)?,
            Err(e) => writeln!(out, "Cannot play video: {}", e)?,
        }
    }

    Ok(())
}
