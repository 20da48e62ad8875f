// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing persisted sort orders or filter flags
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sort order '{0}'")]
    UnknownSortOrder(String),

    #[error("Unknown filter flag '{0}'")]
    UnknownFilterFlag(String),
}

/// Errors that can occur when reading or writing list preferences
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to read preferences file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences JSON in {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    JsonSerializeFailed(#[from] serde_json::Error),
}

/// Errors that can occur when loading episode lists or store schemas from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
