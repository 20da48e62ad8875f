// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PrefsError;
use crate::model::{FilterSpec, SortOrder};

/// Sort order used when no preference has been stored
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::DateNewOld;

/// Persisted sort and filter choice for one episode list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    pub filter: FilterSpec,
}

impl ListPreferences {
    /// The stored sort order, or [`DEFAULT_SORT_ORDER`]
    pub fn sort_order_or_default(&self) -> SortOrder {
        self.sort_order.unwrap_or(DEFAULT_SORT_ORDER)
    }
}

/// Write list preferences as JSON
pub fn write_preferences(prefs: &ListPreferences, path: &Path) -> Result<(), PrefsError> {
    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json).map_err(|e| PrefsError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read list preferences from a JSON file
pub fn read_preferences(path: &Path) -> Result<ListPreferences, PrefsError> {
    let content = std::fs::read_to_string(path).map_err(|e| PrefsError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| PrefsError::JsonParseFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
