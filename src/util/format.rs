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

use crate::session::{Listing, NowPlaying};

/// Formats a catalog or playlist entry, appending the flag reason if the
/// video is flagged.
///
/// # Examples
///
/// ```ignore
/// // Amazing Cats (cat1) [#cat #animal] - FLAGGED (reason: dont_like_cats)
/// let line = format_listing(&listing);
/// ```
pub(crate) fn format_listing(listing: &Listing) -> String {
    match &listing.flag {
        Some(reason) => format!("{} - FLAGGED (reason: {})", listing.video, reason),
        None => listing.video.to_string(),
    }
}

pub(crate) fn format_now_playing(now: &NowPlaying) -> String {
    if now.paused {
        format!("{} - PAUSED", now.video)
    } else {
        now.video.to_string()
    }
}
