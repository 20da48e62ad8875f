// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single podcast episode as seen by the ordering engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i64,
    pub feed_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Episode link, used as a stand-in for the media filename when sorting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<FixedOffset>>,
    /// Title of the owning feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

/// The media file attached to an episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Duration in seconds
    #[serde(default)]
    pub duration: u64,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// When the episode was last played to completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<DateTime<FixedOffset>>,
}

impl Episode {
    /// Create an episode with only its identity set
    pub fn new(id: i64, feed_id: i64) -> Self {
        Self {
            id,
            feed_id,
            title: None,
            link: None,
            pub_date: None,
            feed_title: None,
            media: None,
        }
    }
}

/// Play state of an episode, as stored in the `read` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    /// Never seen by the user
    New,
    Unplayed,
    Played,
}

impl PlayState {
    /// Integer code stored by the persistent store
    pub fn code(self) -> i32 {
        match self {
            PlayState::New => -1,
            PlayState::Unplayed => 0,
            PlayState::Played => 1,
        }
    }
}
