// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Which episodes an episode list should show.
///
/// Flags come in mutually exclusive pairs (played/unplayed/new, paused/not paused, ...).
/// Setting both sides of a pair is not rejected; the filter compiler honours the first one.
///
/// Persisted as the list of set flag names, see [`FilterFlag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<FilterFlag>", into = "Vec<FilterFlag>")]
pub struct FilterSpec {
    pub show_played: bool,
    /// Matches unplayed and new episodes alike
    pub show_unplayed: bool,
    pub show_new: bool,
    pub show_paused: bool,
    pub show_not_paused: bool,
    pub show_queued: bool,
    pub show_not_queued: bool,
    pub show_downloaded: bool,
    pub show_not_downloaded: bool,
    pub show_has_media: bool,
    pub show_no_media: bool,
    pub show_is_favorite: bool,
    pub show_not_favorite: bool,
    /// Completed at least once
    pub show_in_history: bool,
    /// When false, only episodes of subscribed feeds are shown
    pub include_not_subscribed: bool,
}

/// A single filter flag, named the way it is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterFlag {
    Played,
    Unplayed,
    New,
    Paused,
    NotPaused,
    Queued,
    NotQueued,
    Downloaded,
    NotDownloaded,
    HasMedia,
    NoMedia,
    IsFavorite,
    NotFavorite,
    InHistory,
    IncludeNotSubscribed,
}

impl FilterFlag {
    /// Every flag, in persisted order
    pub const ALL: [FilterFlag; 15] = [
        FilterFlag::Played,
        FilterFlag::Unplayed,
        FilterFlag::New,
        FilterFlag::Paused,
        FilterFlag::NotPaused,
        FilterFlag::Queued,
        FilterFlag::NotQueued,
        FilterFlag::Downloaded,
        FilterFlag::NotDownloaded,
        FilterFlag::HasMedia,
        FilterFlag::NoMedia,
        FilterFlag::IsFavorite,
        FilterFlag::NotFavorite,
        FilterFlag::InHistory,
        FilterFlag::IncludeNotSubscribed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterFlag::Played => "played",
            FilterFlag::Unplayed => "unplayed",
            FilterFlag::New => "new",
            FilterFlag::Paused => "paused",
            FilterFlag::NotPaused => "not_paused",
            FilterFlag::Queued => "queued",
            FilterFlag::NotQueued => "not_queued",
            FilterFlag::Downloaded => "downloaded",
            FilterFlag::NotDownloaded => "not_downloaded",
            FilterFlag::HasMedia => "has_media",
            FilterFlag::NoMedia => "no_media",
            FilterFlag::IsFavorite => "is_favorite",
            FilterFlag::NotFavorite => "not_favorite",
            FilterFlag::InHistory => "in_history",
            FilterFlag::IncludeNotSubscribed => "include_not_subscribed",
        }
    }
}

impl fmt::Display for FilterFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterFlag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| ParseError::UnknownFilterFlag(s.to_string()))
    }
}

impl FilterSpec {
    /// Build a spec with exactly the given flags set
    pub fn from_flags<I: IntoIterator<Item = FilterFlag>>(flags: I) -> Self {
        flags.into_iter().fold(Self::default(), Self::with)
    }

    /// Return a copy with one more flag set
    pub fn with(mut self, flag: FilterFlag) -> Self {
        *self.flag_mut(flag) = true;
        self
    }

    /// Whether a flag is set
    pub fn is_set(&self, flag: FilterFlag) -> bool {
        match flag {
            FilterFlag::Played => self.show_played,
            FilterFlag::Unplayed => self.show_unplayed,
            FilterFlag::New => self.show_new,
            FilterFlag::Paused => self.show_paused,
            FilterFlag::NotPaused => self.show_not_paused,
            FilterFlag::Queued => self.show_queued,
            FilterFlag::NotQueued => self.show_not_queued,
            FilterFlag::Downloaded => self.show_downloaded,
            FilterFlag::NotDownloaded => self.show_not_downloaded,
            FilterFlag::HasMedia => self.show_has_media,
            FilterFlag::NoMedia => self.show_no_media,
            FilterFlag::IsFavorite => self.show_is_favorite,
            FilterFlag::NotFavorite => self.show_not_favorite,
            FilterFlag::InHistory => self.show_in_history,
            FilterFlag::IncludeNotSubscribed => self.include_not_subscribed,
        }
    }

    /// The set flags, in persisted order
    pub fn flags(&self) -> Vec<FilterFlag> {
        FilterFlag::ALL
            .into_iter()
            .filter(|flag| self.is_set(*flag))
            .collect()
    }

    /// True when the spec selects every episode, i.e. compiles to an empty predicate
    pub fn is_unfiltered(&self) -> bool {
        self.flags() == [FilterFlag::IncludeNotSubscribed]
    }

    fn flag_mut(&mut self, flag: FilterFlag) -> &mut bool {
        match flag {
            FilterFlag::Played => &mut self.show_played,
            FilterFlag::Unplayed => &mut self.show_unplayed,
            FilterFlag::New => &mut self.show_new,
            FilterFlag::Paused => &mut self.show_paused,
            FilterFlag::NotPaused => &mut self.show_not_paused,
            FilterFlag::Queued => &mut self.show_queued,
            FilterFlag::NotQueued => &mut self.show_not_queued,
            FilterFlag::Downloaded => &mut self.show_downloaded,
            FilterFlag::NotDownloaded => &mut self.show_not_downloaded,
            FilterFlag::HasMedia => &mut self.show_has_media,
            FilterFlag::NoMedia => &mut self.show_no_media,
            FilterFlag::IsFavorite => &mut self.show_is_favorite,
            FilterFlag::NotFavorite => &mut self.show_not_favorite,
            FilterFlag::InHistory => &mut self.show_in_history,
            FilterFlag::IncludeNotSubscribed => &mut self.include_not_subscribed,
        }
    }
}

impl From<Vec<FilterFlag>> for FilterSpec {
    fn from(flags: Vec<FilterFlag>) -> Self {
        Self::from_flags(flags)
    }
}

impl From<FilterSpec> for Vec<FilterFlag> {
    fn from(spec: FilterSpec) -> Self {
        spec.flags()
    }
}

/// Comma-separated flag names, e.g. `unplayed,downloaded`
impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.flags().into_iter().map(FilterFlag::as_str).collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for FilterSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(FilterFlag::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_flags)
    }
}
