// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::InputError;
use crate::filter::StoreSchema;
use crate::model::Episode;

/// Read a JSON array of episodes
pub fn read_episodes(path: &Path) -> Result<Vec<Episode>, InputError> {
    read_json(path)
}

/// Read a store schema override; fields left out keep their defaults
pub fn read_schema(path: &Path) -> Result<StoreSchema, InputError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| InputError::JsonParseFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
