// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Names of the tables, columns and clauses the filter compiler refers to.
///
/// The default matches the episode database of the podcast client. Fields
/// missing from a deserialized schema fall back to those defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSchema {
    /// Episode rows
    pub items_table: String,
    /// Media rows, joined 1:0..1 to episodes
    pub media_table: String,
    /// Queue membership rows
    pub queue_table: String,
    /// Favorite membership rows
    pub favorites_table: String,
    /// Play state on the episode row (-1 new, 0 unplayed, 1 played)
    pub read_column: String,
    /// Playback position in milliseconds on the media row, nullable
    pub position_column: String,
    /// Completion timestamp on the media row
    pub last_played_column: String,
    /// Download timestamp on the media row, 0 when not downloaded
    pub download_date_column: String,
    /// Primary key of episode and media rows
    pub id_column: String,
    /// Episode reference in the queue and favorites tables
    pub member_item_column: String,
    /// Predicate that holds when an episode's feed is subscribed
    pub feed_is_subscribed: String,
}

impl Default for StoreSchema {
    fn default() -> Self {
        Self {
            items_table: "FeedItems".to_string(),
            media_table: "FeedMedia".to_string(),
            queue_table: "Queue".to_string(),
            favorites_table: "Favorites".to_string(),
            read_column: "read".to_string(),
            position_column: "position".to_string(),
            last_played_column: "last_played_time_history".to_string(),
            download_date_column: "download_date".to_string(),
            id_column: "id".to_string(),
            member_item_column: "feeditem".to_string(),
            feed_is_subscribed: "FeedItems.feed IN (SELECT Feeds.id FROM Feeds WHERE Feeds.state = 0)"
                .to_string(),
        }
    }
}

impl StoreSchema {
    pub fn item_read(&self) -> String {
        format!("{}.{}", self.items_table, self.read_column)
    }

    pub fn item_id(&self) -> String {
        format!("{}.{}", self.items_table, self.id_column)
    }

    pub fn media_id(&self) -> String {
        format!("{}.{}", self.media_table, self.id_column)
    }

    pub fn media_position(&self) -> String {
        format!("{}.{}", self.media_table, self.position_column)
    }

    pub fn media_last_played(&self) -> String {
        format!("{}.{}", self.media_table, self.last_played_column)
    }

    pub fn media_download_date(&self) -> String {
        format!("{}.{}", self.media_table, self.download_date_column)
    }

    /// Sub-query yielding the ids of queued episodes
    pub fn queue_members(&self) -> String {
        format!("SELECT {} FROM {}", self.member_item_column, self.queue_table)
    }

    /// Sub-query yielding the ids of favorite episodes
    pub fn favorite_members(&self) -> String {
        format!("SELECT {} FROM {}", self.member_item_column, self.favorites_table)
    }
}
