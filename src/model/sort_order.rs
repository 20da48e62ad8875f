// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Ordering policy for an episode list.
///
/// Serialized as the tag name, e.g. `DATE_NEW_OLD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    EpisodeTitleAZ,
    EpisodeTitleZA,
    DateOldNew,
    DateNewOld,
    DurationShortLong,
    DurationLongShort,
    EpisodeFilenameAZ,
    EpisodeFilenameZA,
    FeedTitleAZ,
    FeedTitleZA,
    Random,
    SmartShuffleOldNew,
    SmartShuffleNewOld,
    SizeSmallLarge,
    SizeLargeSmall,
    CompletionDateNewOld,
}

/// Whether an order is meaningful within a single feed or only across feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortScope {
    IntraFeed,
    InterFeed,
}

impl SortOrder {
    /// Every sort order, in declaration order
    pub const ALL: [SortOrder; 16] = [
        SortOrder::EpisodeTitleAZ,
        SortOrder::EpisodeTitleZA,
        SortOrder::DateOldNew,
        SortOrder::DateNewOld,
        SortOrder::DurationShortLong,
        SortOrder::DurationLongShort,
        SortOrder::EpisodeFilenameAZ,
        SortOrder::EpisodeFilenameZA,
        SortOrder::FeedTitleAZ,
        SortOrder::FeedTitleZA,
        SortOrder::Random,
        SortOrder::SmartShuffleOldNew,
        SortOrder::SmartShuffleNewOld,
        SortOrder::SizeSmallLarge,
        SortOrder::SizeLargeSmall,
        SortOrder::CompletionDateNewOld,
    ];

    /// The persisted tag name
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::EpisodeTitleAZ => "EPISODE_TITLE_A_Z",
            SortOrder::EpisodeTitleZA => "EPISODE_TITLE_Z_A",
            SortOrder::DateOldNew => "DATE_OLD_NEW",
            SortOrder::DateNewOld => "DATE_NEW_OLD",
            SortOrder::DurationShortLong => "DURATION_SHORT_LONG",
            SortOrder::DurationLongShort => "DURATION_LONG_SHORT",
            SortOrder::EpisodeFilenameAZ => "EPISODE_FILENAME_A_Z",
            SortOrder::EpisodeFilenameZA => "EPISODE_FILENAME_Z_A",
            SortOrder::FeedTitleAZ => "FEED_TITLE_A_Z",
            SortOrder::FeedTitleZA => "FEED_TITLE_Z_A",
            SortOrder::Random => "RANDOM",
            SortOrder::SmartShuffleOldNew => "SMART_SHUFFLE_OLD_NEW",
            SortOrder::SmartShuffleNewOld => "SMART_SHUFFLE_NEW_OLD",
            SortOrder::SizeSmallLarge => "SIZE_SMALL_LARGE",
            SortOrder::SizeLargeSmall => "SIZE_LARGE_SMALL",
            SortOrder::CompletionDateNewOld => "COMPLETION_DATE_NEW_OLD",
        }
    }

    /// Feed title, random and smart shuffle orders only make sense across feeds
    pub fn scope(self) -> SortScope {
        match self {
            SortOrder::FeedTitleAZ
            | SortOrder::FeedTitleZA
            | SortOrder::Random
            | SortOrder::SmartShuffleOldNew
            | SortOrder::SmartShuffleNewOld => SortScope::InterFeed,
            _ => SortScope::IntraFeed,
        }
    }

    /// The same policy in the opposite direction, if there is one
    pub fn reversed(self) -> Option<SortOrder> {
        match self {
            SortOrder::EpisodeTitleAZ => Some(SortOrder::EpisodeTitleZA),
            SortOrder::EpisodeTitleZA => Some(SortOrder::EpisodeTitleAZ),
            SortOrder::DateOldNew => Some(SortOrder::DateNewOld),
            SortOrder::DateNewOld => Some(SortOrder::DateOldNew),
            SortOrder::DurationShortLong => Some(SortOrder::DurationLongShort),
            SortOrder::DurationLongShort => Some(SortOrder::DurationShortLong),
            SortOrder::EpisodeFilenameAZ => Some(SortOrder::EpisodeFilenameZA),
            SortOrder::EpisodeFilenameZA => Some(SortOrder::EpisodeFilenameAZ),
            SortOrder::FeedTitleAZ => Some(SortOrder::FeedTitleZA),
            SortOrder::FeedTitleZA => Some(SortOrder::FeedTitleAZ),
            SortOrder::SmartShuffleOldNew => Some(SortOrder::SmartShuffleNewOld),
            SortOrder::SmartShuffleNewOld => Some(SortOrder::SmartShuffleOldNew),
            SortOrder::SizeSmallLarge => Some(SortOrder::SizeLargeSmall),
            SortOrder::SizeLargeSmall => Some(SortOrder::SizeSmallLarge),
            SortOrder::Random | SortOrder::CompletionDateNewOld => None,
        }
    }

    /// True for orders that reshape the list instead of comparing pairs
    pub fn is_permutor(self) -> bool {
        matches!(
            self,
            SortOrder::Random | SortOrder::SmartShuffleOldNew | SortOrder::SmartShuffleNewOld
        )
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSortOrder(s.to_string()))
    }
}
