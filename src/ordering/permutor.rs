// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Borrow;
use std::cmp::Reverse;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Episode, SortOrder};
use crate::ordering::keys;
use crate::ordering::smart_shuffle::smart_shuffle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// Reorder episodes in place according to a sort order.
///
/// `RANDOM` draws from the thread-local generator; use [`reorder_with_rng`]
/// to supply a seeded one.
pub fn reorder<T: Borrow<Episode>>(episodes: &mut Vec<T>, order: SortOrder) {
    reorder_with_rng(episodes, order, &mut rand::rng());
}

/// Reorder episodes in place, drawing randomness for `RANDOM` from `rng`.
///
/// Only the slots of `episodes` are rearranged; no episode is added, dropped
/// or modified. Comparator orders are stable, and each descending order is
/// its ascending partner with the operands swapped, so ties keep their input
/// order in both directions.
pub fn reorder_with_rng<T, R>(episodes: &mut Vec<T>, order: SortOrder, rng: &mut R)
where
    T: Borrow<Episode>,
    R: Rng + ?Sized,
{
    tracing::debug!(%order, count = episodes.len(), "reordering episodes");

    if episodes.len() < 2 {
        return;
    }

    use Direction::{Ascending, Descending};

    match order {
        SortOrder::EpisodeTitleAZ => sort_by(episodes, Ascending, keys::item_title),
        SortOrder::EpisodeTitleZA => sort_by(episodes, Descending, keys::item_title),
        SortOrder::DateOldNew => sort_by(episodes, Ascending, keys::pub_date),
        SortOrder::DateNewOld => sort_by(episodes, Descending, keys::pub_date),
        SortOrder::DurationShortLong => sort_by(episodes, Ascending, keys::duration),
        SortOrder::DurationLongShort => sort_by(episodes, Descending, keys::duration),
        SortOrder::EpisodeFilenameAZ => sort_by(episodes, Ascending, keys::item_link),
        SortOrder::EpisodeFilenameZA => sort_by(episodes, Descending, keys::item_link),
        SortOrder::FeedTitleAZ => sort_by(episodes, Ascending, keys::feed_title),
        SortOrder::FeedTitleZA => sort_by(episodes, Descending, keys::feed_title),
        SortOrder::SizeSmallLarge => sort_by(episodes, Ascending, keys::size),
        SortOrder::SizeLargeSmall => sort_by(episodes, Descending, keys::size),
        SortOrder::CompletionDateNewOld => sort_by(episodes, Descending, keys::last_played),
        SortOrder::Random => episodes.shuffle(rng),
        SortOrder::SmartShuffleOldNew => smart_shuffle(episodes, true),
        SortOrder::SmartShuffleNewOld => smart_shuffle(episodes, false),
    }
}

fn sort_by<T, K, F>(episodes: &mut [T], direction: Direction, key: F)
where
    T: Borrow<Episode>,
    K: Ord,
    F: Fn(&Episode) -> K,
{
    // sort_by_cached_key is stable and extracts each key once
    match direction {
        Direction::Ascending => episodes.sort_by_cached_key(|e| key(e.borrow())),
        Direction::Descending => episodes.sort_by_cached_key(|e| Reverse(key(e.borrow()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Media;
    use chrono::{DateTime, Duration};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::rc::Rc;

    fn dated(id: i64, date: Option<&str>) -> Episode {
        let mut episode = Episode::new(id, 1);
        episode.pub_date = date.map(|d| DateTime::parse_from_rfc3339(d).unwrap());
        episode
    }

    fn ids<T: Borrow<Episode>>(episodes: &[T]) -> Vec<i64> {
        episodes
            .iter()
            .map(|e| {
                let episode: &Episode = e.borrow();
                episode.id
            })
            .collect()
    }

    /// Episodes with distinct values for every sort key
    fn distinct_queue() -> Vec<Episode> {
        let base = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let titles = ["delta", "Alpha", "echo", "charlie", "Bravo"];
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let i = i as i64;
                let mut episode = Episode::new(i, 10 + i);
                episode.title = Some(title.to_string());
                let file = titles[(i as usize + 2) % 5];
                episode.link = Some(format!("https://example.com/{file}.mp3"));
                episode.feed_title = Some(format!("Feed {}", (i * 3) % 5));
                episode.pub_date = Some(base + Duration::days((i * 7) % 5));
                episode.media = Some(Media {
                    duration: ((i * 2) % 5) as u64 * 60,
                    size: ((i * 4) % 5) as u64 * 1000,
                    last_played_at: Some(base + Duration::hours((i * 3) % 5)),
                });
                episode
            })
            .collect()
    }

    /// Episodes where every sort key collides
    fn tied_queue(count: i64) -> Vec<Episode> {
        (0..count)
            .map(|i| {
                let mut episode = dated(i, Some("2024-01-01T00:00:00Z"));
                episode.title = Some("Same".to_string());
                episode.media = Some(Media::default());
                episode
            })
            .collect()
    }

    #[test]
    fn date_old_new_puts_missing_dates_first() {
        let mut queue = vec![
            dated(0, Some("2024-03-01T00:00:00Z")),
            dated(1, None),
            dated(2, Some("2023-01-15T00:00:00Z")),
            dated(3, Some("2024-03-01T00:00:00Z")),
        ];

        reorder(&mut queue, SortOrder::DateOldNew);

        assert_eq!(ids(&queue), vec![1, 2, 0, 3]);
    }

    #[test]
    fn date_new_old_keeps_ties_in_input_order() {
        let mut queue = vec![
            dated(0, Some("2024-03-01T00:00:00Z")),
            dated(1, None),
            dated(2, Some("2023-01-15T00:00:00Z")),
            dated(3, Some("2024-03-01T00:00:00Z")),
        ];

        reorder(&mut queue, SortOrder::DateNewOld);

        assert_eq!(ids(&queue), vec![0, 3, 2, 1]);
    }

    #[test]
    fn every_order_is_a_permutation() {
        for order in SortOrder::ALL {
            let mut queue = distinct_queue();
            let mut rng = StdRng::seed_from_u64(7);

            reorder_with_rng(&mut queue, order, &mut rng);

            let mut seen = ids(&queue);
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3, 4], "{order}");
        }
    }

    #[test]
    fn paired_orders_are_exact_reverses_for_distinct_keys() {
        for order in SortOrder::ALL.into_iter().filter(|o| !o.is_permutor()) {
            let Some(reverse) = order.reversed() else {
                continue;
            };

            let mut forward = distinct_queue();
            reorder(&mut forward, order);
            let mut backward = distinct_queue();
            reorder(&mut backward, reverse);

            let mut expected = ids(&backward);
            expected.reverse();
            assert_eq!(ids(&forward), expected, "{order} vs {reverse}");
        }
    }

    #[test]
    fn comparator_orders_are_stable() {
        for order in SortOrder::ALL.into_iter().filter(|o| !o.is_permutor()) {
            let mut queue = tied_queue(6);

            reorder(&mut queue, order);

            assert_eq!(ids(&queue), vec![0, 1, 2, 3, 4, 5], "{order}");
        }
    }

    fn follows_key<K, F>(queue: &[Episode], direction: Direction, key: F) -> bool
    where
        K: Ord,
        F: Fn(&Episode) -> K,
    {
        let values: Vec<K> = queue.iter().map(key).collect();
        values.windows(2).all(|w| match direction {
            Direction::Ascending => w[0] <= w[1],
            Direction::Descending => w[0] >= w[1],
        })
    }

    #[test]
    fn comparator_orders_follow_their_own_key() {
        use Direction::{Ascending, Descending};

        for order in SortOrder::ALL.into_iter().filter(|o| !o.is_permutor()) {
            let mut queue = distinct_queue();

            reorder(&mut queue, order);

            let sorted = match order {
                SortOrder::EpisodeTitleAZ => follows_key(&queue, Ascending, keys::item_title),
                SortOrder::EpisodeTitleZA => follows_key(&queue, Descending, keys::item_title),
                SortOrder::DateOldNew => follows_key(&queue, Ascending, keys::pub_date),
                SortOrder::DateNewOld => follows_key(&queue, Descending, keys::pub_date),
                SortOrder::DurationShortLong => follows_key(&queue, Ascending, keys::duration),
                SortOrder::DurationLongShort => follows_key(&queue, Descending, keys::duration),
                SortOrder::EpisodeFilenameAZ => follows_key(&queue, Ascending, keys::item_link),
                SortOrder::EpisodeFilenameZA => follows_key(&queue, Descending, keys::item_link),
                SortOrder::FeedTitleAZ => follows_key(&queue, Ascending, keys::feed_title),
                SortOrder::FeedTitleZA => follows_key(&queue, Descending, keys::feed_title),
                SortOrder::SizeSmallLarge => follows_key(&queue, Ascending, keys::size),
                SortOrder::SizeLargeSmall => follows_key(&queue, Descending, keys::size),
                SortOrder::CompletionDateNewOld => {
                    follows_key(&queue, Descending, keys::last_played)
                }
                SortOrder::Random
                | SortOrder::SmartShuffleOldNew
                | SortOrder::SmartShuffleNewOld => unreachable!(),
            };

            assert!(sorted, "{order}");
        }
    }

    #[test]
    fn filename_sort_uses_link_not_title() {
        let mut queue = distinct_queue();

        reorder(&mut queue, SortOrder::EpisodeFilenameAZ);

        assert!(follows_key(&queue, Direction::Ascending, keys::item_link));
        assert!(!follows_key(&queue, Direction::Ascending, keys::item_title));
    }

    #[test]
    fn title_sort_ignores_case() {
        let mut queue = distinct_queue();

        reorder(&mut queue, SortOrder::EpisodeTitleAZ);

        let titles: Vec<_> = queue.iter().filter_map(|e| e.title.clone()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo", "charlie", "delta", "echo"]);
    }

    #[test]
    fn duration_and_size_sort_numerically() {
        let mut queue = distinct_queue();
        reorder(&mut queue, SortOrder::DurationLongShort);
        let durations: Vec<u64> = queue.iter().map(keys::duration).collect();
        assert_eq!(durations, vec![240, 180, 120, 60, 0]);

        reorder(&mut queue, SortOrder::SizeSmallLarge);
        let sizes: Vec<u64> = queue.iter().map(keys::size).collect();
        assert_eq!(sizes, vec![0, 1000, 2000, 3000, 4000]);
    }

    #[test]
    fn episodes_without_media_sort_as_zero() {
        let mut queue = distinct_queue();
        queue[0].media = None;
        queue[3].media = None;

        reorder(&mut queue, SortOrder::SizeLargeSmall);

        let tail = ids(&queue[3..]);
        assert_eq!(tail, vec![0, 3]);
    }

    #[test]
    fn completion_date_newest_first_and_missing_last() {
        let mut queue = distinct_queue();
        queue[2].media = None;

        reorder(&mut queue, SortOrder::CompletionDateNewOld);

        let played: Vec<_> = queue.iter().map(keys::last_played).collect();
        assert!(played.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(queue.last().map(|e| e.id), Some(2));
    }

    #[test]
    fn random_is_deterministic_for_a_seed() {
        let make = || (1..=5).map(|i| Episode::new(i, i)).collect::<Vec<_>>();

        let mut first = make();
        reorder_with_rng(&mut first, SortOrder::Random, &mut StdRng::seed_from_u64(42));

        let mut second = make();
        reorder_with_rng(&mut second, SortOrder::Random, &mut StdRng::seed_from_u64(42));

        assert_eq!(ids(&first), ids(&second));

        let mut sorted = ids(&first);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn random_reaches_other_orders() {
        let initial: Vec<Episode> = (0..20).map(|i| Episode::new(i, i)).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let moved = (0..10).any(|_| {
            let mut queue = initial.clone();
            reorder_with_rng(&mut queue, SortOrder::Random, &mut rng);
            ids(&queue) != ids(&initial)
        });

        assert!(moved);
    }

    #[test]
    fn reorders_shared_handles_without_cloning_episodes() {
        let shared: Vec<Rc<Episode>> = distinct_queue().into_iter().map(Rc::new).collect();
        let mut queue = shared.clone();

        reorder(&mut queue, SortOrder::FeedTitleAZ);

        for episode in &queue {
            assert!(shared.iter().any(|s| Rc::ptr_eq(s, episode)));
        }
        let feed_titles: Vec<String> = queue.iter().map(|e| keys::feed_title(e)).collect();
        assert!(feed_titles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        for order in SortOrder::ALL {
            let mut empty: Vec<Episode> = Vec::new();
            reorder(&mut empty, order);
            assert!(empty.is_empty());

            let mut single = vec![Episode::new(9, 9)];
            reorder(&mut single, order);
            assert_eq!(ids(&single), vec![9]);
        }
    }

    #[test]
    fn smart_shuffle_orders_follow_date_orders_within_each_feed() {
        let base = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let make = || -> Vec<Episode> {
            (0..12)
                .map(|i| {
                    let mut episode = Episode::new(i, i % 3);
                    episode.pub_date = Some(base + Duration::days((i * 5) % 12));
                    episode
                })
                .collect()
        };

        for (shuffle, by_date) in [
            (SortOrder::SmartShuffleOldNew, SortOrder::DateOldNew),
            (SortOrder::SmartShuffleNewOld, SortOrder::DateNewOld),
        ] {
            let mut shuffled = make();
            reorder(&mut shuffled, shuffle);
            let mut sorted = make();
            reorder(&mut sorted, by_date);

            for feed in 0..3 {
                let in_feed = |queue: &Vec<Episode>| -> Vec<i64> {
                    queue
                        .iter()
                        .filter(|e| e.feed_id == feed)
                        .map(|e| e.id)
                        .collect()
                };
                assert_eq!(in_feed(&shuffled), in_feed(&sorted), "{shuffle}");
            }
        }
    }
}
