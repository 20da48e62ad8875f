// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::filter::schema::StoreSchema;
use crate::model::{FilterSpec, PlayState};

/// Turns a [`FilterSpec`] into an SQL boolean expression for a `WHERE` clause
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    schema: StoreSchema,
}

impl FilterCompiler {
    /// Create a compiler that targets the given schema
    pub fn new(schema: StoreSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &StoreSchema {
        &self.schema
    }

    /// Express the filter as a parenthesized conjunction.
    ///
    /// Each flag pair contributes at most one conjunct; when both sides of a
    /// pair are set the first one wins. Returns an empty string when there is
    /// nothing to filter.
    pub fn compile(&self, filter: &FilterSpec) -> String {
        let schema = &self.schema;
        let read = schema.item_read();
        let position = schema.media_position();
        let item_id = schema.item_id();

        let mut statements = Vec::new();

        if filter.show_played {
            statements.push(format!("{read} = {} ", PlayState::Played.code()));
        } else if filter.show_unplayed {
            // Also matches new episodes
            statements.push(format!(" NOT {read} = {} ", PlayState::Played.code()));
        } else if filter.show_new {
            statements.push(format!("{read} = {} ", PlayState::New.code()));
        }

        if filter.show_paused {
            statements.push(format!(" ({position} NOT NULL AND {position} > 0 ) "));
        } else if filter.show_not_paused {
            statements.push(format!(" ({position} IS NULL OR {position} = 0 ) "));
        }

        if filter.show_queued {
            statements.push(format!("{item_id} IN ({}) ", schema.queue_members()));
        } else if filter.show_not_queued {
            statements.push(format!("{item_id} NOT IN ({}) ", schema.queue_members()));
        }

        if filter.show_downloaded {
            statements.push(format!("{} > 0 ", schema.media_download_date()));
        } else if filter.show_not_downloaded {
            statements.push(format!("{} = 0 ", schema.media_download_date()));
        }

        if filter.show_has_media {
            statements.push(format!("{} NOT NULL ", schema.media_id()));
        } else if filter.show_no_media {
            statements.push(format!("{} IS NULL ", schema.media_id()));
        }

        if filter.show_is_favorite {
            statements.push(format!("{item_id} IN ({}) ", schema.favorite_members()));
        } else if filter.show_not_favorite {
            statements.push(format!("{item_id} NOT IN ({}) ", schema.favorite_members()));
        }

        if filter.show_in_history {
            statements.push(format!("{} > 0 ", schema.media_last_played()));
        }

        if !filter.include_not_subscribed {
            statements.push(schema.feed_is_subscribed.clone());
        }

        tracing::debug!(conjuncts = statements.len(), %filter, "compiled episode filter");

        if statements.is_empty() {
            return String::new();
        }

        format!(" ({}) ", statements.join(" AND "))
    }
}

/// Compile a filter against the default schema
pub fn compile_filter(filter: &FilterSpec) -> String {
    FilterCompiler::default().compile(filter)
}
