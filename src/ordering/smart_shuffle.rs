// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::model::Episode;
use crate::ordering::keys;

/// Reorder by publication date while spreading each feed's episodes through the list.
///
/// Episodes of one feed stay in date order (ascending or descending), but the
/// feeds are interleaved so that long runs of the same feed are avoided.
///
/// For a queue `ABCDDEEEEEEEEEE` the largest feed (`E`) is spread over the empty
/// list first, then `D` is spread over the slots still free, and so on until
/// every slot is taken.
pub fn smart_shuffle<T: Borrow<Episode>>(episodes: &mut Vec<T>, ascending: bool) {
    let total = episodes.len();
    if total < 2 {
        return;
    }

    let mut feeds = group_by_feed(std::mem::take(episodes));
    for feed in &mut feeds {
        if ascending {
            feed.sort_by_key(|e| keys::pub_date(e.borrow()));
        } else {
            feed.sort_by_key(|e| Reverse(keys::pub_date(e.borrow())));
        }
    }

    // Largest feed first; equal sizes keep first-appearance order
    feeds.sort_by_key(|feed| Reverse(feed.len()));

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();
    let mut empty_slots: Vec<usize> = (0..total).collect();

    for feed in feeds {
        let count = feed.len();
        let spread = empty_slots.len() as f64 / (count + 1) as f64;
        tracing::trace!(count, spread, free = empty_slots.len(), "spreading feed");

        let mut items = feed.into_iter();
        let mut remaining = Vec::with_capacity(empty_slots.len() - count);
        let mut skipped = 0usize;
        let mut placed = 0usize;

        for slot in empty_slots {
            if placed == count {
                remaining.push(slot);
                continue;
            }

            skipped += 1;
            if skipped as f64 >= spread * (placed + 1) as f64 {
                assert!(
                    slots[slot].is_none(),
                    "smart shuffle placed two episodes into slot {slot}"
                );
                slots[slot] = items.next();
                placed += 1;
            } else {
                remaining.push(slot);
            }
        }

        assert_eq!(placed, count, "smart shuffle ran out of free slots");
        empty_slots = remaining;
    }

    episodes.extend(slots.into_iter().flatten());
    assert_eq!(episodes.len(), total, "smart shuffle left a slot empty");
}

/// Split episodes into per-feed lists, in order of each feed's first appearance
fn group_by_feed<T: Borrow<Episode>>(episodes: Vec<T>) -> Vec<Vec<T>> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut feeds: Vec<Vec<T>> = Vec::new();

    for episode in episodes {
        let item: &Episode = episode.borrow();
        let feed_id = item.feed_id;
        let position = *index.entry(feed_id).or_insert_with(|| {
            feeds.push(Vec::new());
            feeds.len() - 1
        });
        feeds[position].push(episode);
    }

    feeds
}
