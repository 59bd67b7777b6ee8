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

//! # Playback and playlist session.
//!
//! A [`Session`] is the single owner of everything a user can change: the
//! playback state, the playlists and the set of flagged videos. It receives
//! its [`Catalog`] at construction and consults it on every operation that
//! names a video; the catalog itself is never modified.
//!
//! ## Failure model
//!
//! Each operation returns a [`PlayerError`] when its preconditions do not
//! hold. Checks run in a fixed order and the first failure wins. A failed
//! operation never changes any state.

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use rand::{rng, seq::IndexedRandom};

use crate::{
    catalog::Catalog,
    error::PlayerError,
    model::Video,
    player::{Playback, PlayerState},
    playlist::Playlists,
};

const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Result of starting a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The video that was playing (or paused) and had to be stopped first.
    pub stopped: Option<Video>,
    pub playing: Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A video together with its flag reason, if flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub video: Video,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: Video,
    pub reason: String,
    /// Set when the flagged video was playing and got stopped.
    pub stopped: Option<Video>,
}

pub struct Session {
    catalog: Arc<Catalog>,
    playback: Playback,
    playlists: Playlists,
    flags: HashMap<String, String>,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            playback: Playback::new(),
            playlists: Playlists::new(),
            flags: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> PlayerState {
        self.playback.state()
    }

    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Every catalog video sorted by title, with flag reasons attached.
    pub fn list_all_videos(&self) -> Vec<Listing> {
        let mut videos: Vec<&Video> = self.catalog.all_videos().collect();
        videos.sort_by(|a, b| by_title(a, b));

        videos.into_iter().map(|v| self.listing(v)).collect()
    }

    pub fn play(&mut self, video_id: &str) -> Result<PlayOutcome, PlayerError> {
        let video = self.playable_video(video_id)?.clone();
        Ok(self.start(video))
    }

    pub fn stop(&mut self) -> Result<Video, PlayerError> {
        Ok(self.playback.stop()?)
    }

    /// Plays a video chosen uniformly at random among all playable videos.
    ///
    /// The video that is currently playing may be chosen again.
    pub fn play_random(&mut self) -> Result<PlayOutcome, PlayerError> {
        self.play_random_with(|ids| ids.choose(&mut rng()))
    }

    /// Same as [`Session::play_random`] with a caller supplied chooser.
    ///
    /// `pick` receives the playable ids sorted, and returns the one to play.
    pub fn play_random_with(
        &mut self,
        pick: impl FnOnce(&[String]) -> Option<&String>,
    ) -> Result<PlayOutcome, PlayerError> {
        let mut ids: Vec<String> = self
            .catalog
            .all_videos()
            .filter(|v| !self.flags.contains_key(&v.id))
            .map(|v| v.id.clone())
            .collect();
        ids.sort();

        let choice = pick(&ids).cloned().ok_or(PlayerError::NoVideosAvailable)?;
        tracing::debug!(id = %choice, candidates = ids.len(), "Random video chosen");

        self.play(&choice)
    }

    pub fn pause(&mut self) -> Result<Video, PlayerError> {
        Ok(self.playback.pause()?)
    }

    pub fn continue_video(&mut self) -> Result<Video, PlayerError> {
        Ok(self.playback.resume()?)
    }

    /// The current video, or `None` when stopped or nothing was ever played.
    pub fn show_playing(&self) -> Option<NowPlaying> {
        self.playback.current().map(|video| NowPlaying {
            video: video.clone(),
            paused: self.playback.state() == PlayerState::Paused,
        })
    }

    /// Creates an empty playlist and returns its display name.
    pub fn create_playlist(&mut self, name: &str) -> Result<String, PlayerError> {
        let playlist = self.playlists.create(name)?;
        tracing::info!(name = playlist.name(), "Playlist created");

        Ok(playlist.name().to_string())
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Video, PlayerError> {
        self.playlists.get(name)?;
        let video = self.playable_video(video_id)?.clone();

        let playlist = self.playlists.get_mut(name)?;
        if playlist.contains(video_id) {
            return Err(PlayerError::VideoAlreadyInPlaylist(video_id.to_string()));
        }
        playlist.push(video_id);

        Ok(video)
    }

    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<Video, PlayerError> {
        self.playlists.get(name)?;
        let video = self.video(video_id)?.clone();

        if !self.playlists.get_mut(name)?.remove(video_id) {
            return Err(PlayerError::VideoNotInPlaylist(video_id.to_string()));
        }

        Ok(video)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        self.playlists.get_mut(name)?.clear();
        Ok(())
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        let playlist = self.playlists.delete(name)?;
        tracing::info!(name = playlist.name(), "Playlist deleted");

        Ok(())
    }

    /// Display names of every playlist, ordered by lowercased name.
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists.iter().map(|p| p.name().to_string()).collect()
    }

    /// The videos of a playlist in insertion order.
    pub fn show_playlist(&self, name: &str) -> Result<Vec<Listing>, PlayerError> {
        let playlist = self.playlists.get(name)?;

        Ok(playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalog.video(id))
            .map(|v| self.listing(v))
            .collect())
    }

    /// Playable videos whose title contains `term`, ignoring case.
    pub fn search_videos(&self, term: &str) -> Vec<Video> {
        let term = term.to_lowercase();
        self.search(|v| v.title.to_lowercase().contains(&term))
    }

    /// Playable videos carrying `tag`, ignoring case.
    pub fn search_videos_tag(&self, tag: &str) -> Vec<Video> {
        self.search(|v| v.has_tag(tag))
    }

    /// Flags a video so it can no longer be played or added to a playlist.
    ///
    /// An empty `reason` is recorded as `Not supplied`. Flagging the current
    /// video stops it.
    pub fn flag_video(&mut self, video_id: &str, reason: &str) -> Result<FlagOutcome, PlayerError> {
        let video = self.video(video_id)?.clone();

        if self.flags.contains_key(video_id) {
            return Err(PlayerError::VideoAlreadyFlagged(video_id.to_string()));
        }

        let is_current = self
            .playback
            .current()
            .is_some_and(|current| current.id == video.id);
        let stopped = if is_current {
            Some(self.playback.stop()?)
        } else {
            None
        };

        let reason = match reason.trim() {
            "" => DEFAULT_FLAG_REASON.to_string(),
            r => r.to_string(),
        };
        self.flags.insert(video.id.clone(), reason.clone());
        tracing::info!(id = %video.id, %reason, "Video flagged");

        Ok(FlagOutcome {
            video,
            reason,
            stopped,
        })
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<Video, PlayerError> {
        let video = self.video(video_id)?.clone();

        if self.flags.remove(video_id).is_none() {
            return Err(PlayerError::VideoNotFlagged(video_id.to_string()));
        }
        tracing::info!(id = %video.id, "Video flag removed");

        Ok(video)
    }

    fn start(&mut self, video: Video) -> PlayOutcome {
        let stopped = self.playback.play(video.clone());
        PlayOutcome {
            stopped,
            playing: video,
        }
    }

    fn video(&self, video_id: &str) -> Result<&Video, PlayerError> {
        self.catalog
            .video(video_id)
            .ok_or_else(|| PlayerError::VideoNotFound(video_id.to_string()))
    }

    fn playable_video(&self, video_id: &str) -> Result<&Video, PlayerError> {
        let video = self.video(video_id)?;

        match self.flags.get(video_id) {
            Some(reason) => Err(PlayerError::VideoFlagged {
                id: video_id.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(video),
        }
    }

    fn listing(&self, video: &Video) -> Listing {
        Listing {
            video: video.clone(),
            flag: self.flags.get(&video.id).cloned(),
        }
    }

    fn search(&self, matches: impl Fn(&Video) -> bool) -> Vec<Video> {
        let mut found: Vec<Video> = self
            .catalog
            .all_videos()
            .filter(|v| !self.flags.contains_key(&v.id) && matches(v))
            .cloned()
            .collect();
        found.sort_by(by_title);

        found
    }
}

/// Orders videos by title, then by id so equal titles list the same way
/// every time.
fn by_title(a: &Video, b: &Video) -> Ordering {
    a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;

    fn session() -> Session {
        let catalog = Catalog::from_videos(vec![
            Video::new("cat1", "Amazing Cats", vec!["#cat".into(), "#animal".into()]),
            Video::new("dog1", "Funny Dogs", vec!["#dog".into(), "#animal".into()]),
            Video::new("cat2", "Another Cat Video", vec!["#cat".into()]),
        ])
        .unwrap();

        Session::new(Arc::new(catalog))
    }

    #[test]
    fn play_unknown_video_leaves_state_unchanged() {
        let mut session = session();
        session.play("cat1").unwrap();

        assert_eq!(
            session.play("nope"),
            Err(PlayerError::VideoNotFound("nope".to_string()))
        );
        assert_eq!(session.state(), PlayerState::Playing);
        assert_eq!(session.show_playing().map(|n| n.video.id), Some("cat1".to_string()));
    }

    #[test]
    fn pause_continue_scenario() {
        let mut session = session();

        assert_eq!(session.play("cat1").unwrap().playing.title, "Amazing Cats");
        assert_eq!(session.pause().unwrap().title, "Amazing Cats");

        let now = session.show_playing().unwrap();
        assert!(now.paused);
        assert_eq!(now.video.id, "cat1");

        assert_eq!(session.continue_video().unwrap().title, "Amazing Cats");
        assert!(!session.show_playing().unwrap().paused);
    }

    #[test]
    fn pause_with_nothing_playing_is_rejected_without_side_effects() {
        let mut session = session();

        assert_eq!(
            session.pause(),
            Err(PlayerError::InvalidPlaybackState(PlaybackError::NothingPlaying))
        );
        assert_eq!(session.state(), PlayerState::Stopped);
        assert!(session.show_playing().is_none());
    }

    #[test]
    fn random_play_stops_current_video_first() {
        let mut session = session();
        session.play("cat1").unwrap();

        let outcome = session
            .play_random_with(|ids| ids.iter().find(|id| *id == "dog1"))
            .unwrap();

        assert_eq!(outcome.stopped.map(|v| v.id), Some("cat1".to_string()));
        assert_eq!(outcome.playing.id, "dog1");
    }

    #[test]
    fn random_play_may_repeat_current_video() {
        let mut session = session();
        session.play("cat1").unwrap();

        let outcome = session
            .play_random_with(|ids| ids.iter().find(|id| *id == "cat1"))
            .unwrap();

        assert_eq!(outcome.stopped.map(|v| v.id), Some("cat1".to_string()));
        assert_eq!(outcome.playing.id, "cat1");
    }

    #[test]
    fn random_play_offers_every_unflagged_video() {
        let mut session = session();
        session.flag_video("cat2", "").unwrap();

        let mut offered = Vec::new();
        session
            .play_random_with(|ids| {
                offered = ids.to_vec();
                ids.first()
            })
            .unwrap();

        assert_eq!(offered, ["cat1", "dog1"]);
    }

    #[test]
    fn random_play_with_everything_flagged() {
        let mut session = session();
        for id in ["cat1", "cat2", "dog1"] {
            session.flag_video(id, "bad").unwrap();
        }

        assert_eq!(session.play_random(), Err(PlayerError::NoVideosAvailable));
    }

    #[test]
    fn add_checks_playlist_before_video() {
        let mut session = session();

        assert_eq!(
            session.add_to_playlist("missing", "nope"),
            Err(PlayerError::PlaylistNotFound("missing".to_string()))
        );

        session.create_playlist("list").unwrap();
        assert_eq!(
            session.add_to_playlist("list", "nope"),
            Err(PlayerError::VideoNotFound("nope".to_string()))
        );
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut session = session();
        session.create_playlist("My List").unwrap();

        session.add_to_playlist("my list", "dog1").unwrap();
        assert_eq!(
            session.add_to_playlist("MY LIST", "dog1"),
            Err(PlayerError::VideoAlreadyInPlaylist("dog1".to_string()))
        );

        let videos = session.show_playlist("My List").unwrap();
        assert_eq!(videos.len(), 1);
    }

    #[test]
    fn remove_then_add_moves_video_to_end() {
        let mut session = session();
        session.create_playlist("list").unwrap();
        for id in ["cat1", "dog1", "cat2"] {
            session.add_to_playlist("list", id).unwrap();
        }

        session.remove_from_playlist("LIST", "cat1").unwrap();
        session.add_to_playlist("list", "cat1").unwrap();

        let ids: Vec<String> = session
            .show_playlist("list")
            .unwrap()
            .into_iter()
            .map(|l| l.video.id)
            .collect();
        assert_eq!(ids, ["dog1", "cat2", "cat1"]);
    }

    #[test]
    fn remove_missing_member_is_rejected() {
        let mut session = session();
        session.create_playlist("list").unwrap();

        assert_eq!(
            session.remove_from_playlist("list", "cat1"),
            Err(PlayerError::VideoNotInPlaylist("cat1".to_string()))
        );
        assert_eq!(
            session.remove_from_playlist("list", "nope"),
            Err(PlayerError::VideoNotFound("nope".to_string()))
        );
    }

    #[test]
    fn clear_keeps_the_playlist() {
        let mut session = session();
        session.create_playlist("list").unwrap();
        session.add_to_playlist("list", "cat1").unwrap();

        session.clear_playlist("List").unwrap();

        assert_eq!(session.show_playlist("list"), Ok(vec![]));
        assert_eq!(session.playlist_names(), ["list"]);
    }

    #[test]
    fn delete_then_show_reports_missing() {
        let mut session = session();
        session.create_playlist("list").unwrap();
        session.delete_playlist("LIST").unwrap();

        assert_eq!(
            session.show_playlist("list"),
            Err(PlayerError::PlaylistNotFound("list".to_string()))
        );
        assert!(session.playlist_names().is_empty());
    }

    #[test]
    fn list_all_videos_is_sorted_by_title() {
        let titles: Vec<String> = session()
            .list_all_videos()
            .into_iter()
            .map(|l| l.video.title)
            .collect();

        assert_eq!(titles, ["Amazing Cats", "Another Cat Video", "Funny Dogs"]);
    }

    #[test]
    fn search_orders_equal_titles_by_id() {
        let catalog = Catalog::from_videos(vec![
            Video::new("c3", "Same", vec!["#tie".into()]),
            Video::new("a1", "Same", vec!["#tie".into()]),
            Video::new("b2", "Same", vec!["#tie".into()]),
        ])
        .unwrap();
        let session = Session::new(Arc::new(catalog));

        let by_title: Vec<String> = session.search_videos("same").into_iter().map(|v| v.id).collect();
        let by_tag: Vec<String> = session.search_videos_tag("#tie").into_iter().map(|v| v.id).collect();
        let listed: Vec<String> = session.list_all_videos().into_iter().map(|l| l.video.id).collect();

        assert_eq!(by_title, ["a1", "b2", "c3"]);
        assert_eq!(by_tag, ["a1", "b2", "c3"]);
        assert_eq!(listed, ["a1", "b2", "c3"]);
    }

    #[test]
    fn search_folds_non_ascii_case_for_titles_and_tags() {
        let catalog = Catalog::from_videos(vec![Video::new("e1", "Été", vec!["#Été".into()])]).unwrap();
        let session = Session::new(Arc::new(catalog));

        assert_eq!(session.search_videos("été").len(), 1);
        assert_eq!(session.search_videos_tag("#ÉTÉ").len(), 1);
        assert_eq!(session.search_videos_tag("#été").len(), 1);
    }

    #[test]
    fn search_matches_title_and_tag_ignoring_case() {
        let session = session();

        let by_title: Vec<String> = session.search_videos("CAT").into_iter().map(|v| v.id).collect();
        assert_eq!(by_title, ["cat1", "cat2"]);

        let by_tag: Vec<String> = session.search_videos_tag("#ANIMAL").into_iter().map(|v| v.id).collect();
        assert_eq!(by_tag, ["cat1", "dog1"]);

        assert!(session.search_videos_tag("#an").is_empty());
    }

    #[test]
    fn flagging_the_current_video_stops_it() {
        let mut session = session();
        session.play("cat1").unwrap();
        session.pause().unwrap();

        let outcome = session.flag_video("cat1", "  ").unwrap();

        assert_eq!(outcome.reason, "Not supplied");
        assert_eq!(outcome.stopped.map(|v| v.id), Some("cat1".to_string()));
        assert_eq!(session.state(), PlayerState::Stopped);
    }

    #[test]
    fn flagging_another_video_keeps_playback() {
        let mut session = session();
        session.play("cat1").unwrap();

        let outcome = session.flag_video("dog1", "noisy").unwrap();

        assert!(outcome.stopped.is_none());
        assert_eq!(session.state(), PlayerState::Playing);
    }

    #[test]
    fn flagged_videos_cannot_be_played_or_added() {
        let mut session = session();
        session.create_playlist("list").unwrap();
        session.flag_video("dog1", "noisy").unwrap();

        let flagged = PlayerError::VideoFlagged {
            id: "dog1".to_string(),
            reason: "noisy".to_string(),
        };
        assert_eq!(session.play("dog1"), Err(flagged.clone()));
        assert_eq!(session.add_to_playlist("list", "dog1"), Err(flagged));
        assert!(session.search_videos("dogs").is_empty());

        assert_eq!(
            session.flag_video("dog1", "again"),
            Err(PlayerError::VideoAlreadyFlagged("dog1".to_string()))
        );
    }

    #[test]
    fn flag_reasons_show_in_listings() {
        let mut session = session();
        session.create_playlist("list").unwrap();
        session.add_to_playlist("list", "dog1").unwrap();
        session.flag_video("dog1", "noisy").unwrap();

        let listing = session.show_playlist("list").unwrap();
        assert_eq!(listing[0].flag.as_deref(), Some("noisy"));
    }

    #[test]
    fn allow_video_restores_playback() {
        let mut session = session();

        assert_eq!(
            session.allow_video("dog1"),
            Err(PlayerError::VideoNotFlagged("dog1".to_string()))
        );

        session.flag_video("dog1", "noisy").unwrap();
        session.allow_video("dog1").unwrap();

        assert!(session.play("dog1").is_ok());
    }
}
