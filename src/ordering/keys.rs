// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Null-safe sort keys. Missing fields map to a neutral value so the
//! comparators never see an absent key.

use chrono::{DateTime, Utc};

use crate::model::Episode;

/// Publication date, epoch zero when unknown
pub fn pub_date(episode: &Episode) -> DateTime<Utc> {
    episode
        .pub_date
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Lowercased episode title, empty when unknown
pub fn item_title(episode: &Episode) -> String {
    lowercase(episode.title.as_deref())
}

/// Lowercased episode link, empty when unknown
pub fn item_link(episode: &Episode) -> String {
    lowercase(episode.link.as_deref())
}

/// Lowercased title of the owning feed, empty when unknown
pub fn feed_title(episode: &Episode) -> String {
    lowercase(episode.feed_title.as_deref())
}

/// Media duration in seconds, 0 without media
pub fn duration(episode: &Episode) -> u64 {
    episode.media.as_ref().map_or(0, |media| media.duration)
}

/// Media size in bytes, 0 without media
pub fn size(episode: &Episode) -> u64 {
    episode.media.as_ref().map_or(0, |media| media.size)
}

/// Completion time, epoch zero when the episode was never completed
pub fn last_played(episode: &Episode) -> DateTime<Utc> {
    episode
        .media
        .as_ref()
        .and_then(|media| media.last_played_at)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn lowercase(text: Option<&str>) -> String {
    text.map(str::to_lowercase).unwrap_or_default()
}
