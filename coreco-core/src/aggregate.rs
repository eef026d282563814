//! Co-occurrence aggregation.
//!
//! Every user contributes their seed overlap (the number of liked entries
//! that are seeds, counted per occurrence) to each non-seed item they liked.
//! A user without overlap still registers their items with a zero score, so a
//! recorded zero is distinguishable from an item nobody liked.

use tracing::{debug, instrument};

use crate::{
    ids::{ItemId, Score},
    preferences::{LikedItemsByUser, SeedSet},
    scores::ScoreMapping,
};

/// Builds the candidate score table for `seeds` from `liked`.
///
/// Seed items never appear as keys. The contents do not depend on the order
/// users are visited in.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, LikedItemsByUser, SeedSet, UserId, aggregate};
///
/// let seeds: SeedSet = [ItemId::new(1)].into_iter().collect();
/// let liked: LikedItemsByUser = [
///     (UserId::new(1), vec![ItemId::new(1), ItemId::new(2), ItemId::new(3)]),
///     (UserId::new(2), vec![ItemId::new(2)]),
///     (UserId::new(3), vec![ItemId::new(1), ItemId::new(4)]),
/// ]
/// .into_iter()
/// .collect();
///
/// let scores = aggregate(&seeds, &liked);
/// assert_eq!(scores.score(ItemId::new(2)), Some(1));
/// assert_eq!(scores.score(ItemId::new(3)), Some(1));
/// assert_eq!(scores.score(ItemId::new(4)), Some(1));
/// assert_eq!(scores.score(ItemId::new(1)), None);
/// ```
#[must_use]
#[instrument(
    name = "core.aggregate",
    skip_all,
    fields(seeds = seeds.len(), users = liked.user_count()),
)]
pub fn aggregate(seeds: &SeedSet, liked: &LikedItemsByUser) -> ScoreMapping {
    let mut scores = ScoreMapping::new();
    let mut overlapping_users = 0_usize;

    for (_, items) in liked.iter() {
        let factor = seed_overlap(seeds, items);
        if factor > 0 {
            overlapping_users += 1;
        }
        for &item in items {
            if !seeds.contains(item) {
                scores.accumulate(item, factor);
            }
        }
    }

    debug!(
        candidates = scores.len(),
        overlapping_users, "aggregation completed"
    );
    scores
}

fn seed_overlap(seeds: &SeedSet, items: &[ItemId]) -> Score {
    items
        .iter()
        .filter(|&&item| seeds.contains(item))
        .fold(0, |count: Score, _| count.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    use rstest::rstest;

    fn item(id: u64) -> ItemId {
        ItemId::new(id)
    }

    fn liked(rows: &[(u64, &[u64])]) -> LikedItemsByUser {
        rows.iter()
            .map(|&(user, items)| (UserId::new(user), items.iter().copied().map(ItemId::new)))
            .collect()
    }

    fn seeds(ids: &[u64]) -> SeedSet {
        ids.iter().copied().map(ItemId::new).collect()
    }

    #[test]
    fn scores_reference_example() {
        let table = liked(&[(1, &[1, 2, 3]), (2, &[2]), (3, &[1, 4])]);
        let scores = aggregate(&seeds(&[1]), &table);

        let expected: ScoreMapping = [(item(2), 1), (item(3), 1), (item(4), 1)]
            .into_iter()
            .collect();
        assert_eq!(scores, expected);
        assert!(!scores.contains(item(1)));
    }

    #[test]
    fn users_without_overlap_record_zero_scores() {
        let table = liked(&[(1, &[5, 6])]);
        let scores = aggregate(&seeds(&[1]), &table);
        assert_eq!(scores.score(item(5)), Some(0));
        assert_eq!(scores.score(item(6)), Some(0));
        assert_eq!(scores.score(item(7)), None);
    }

    #[test]
    fn repeated_seed_likes_count_per_occurrence() {
        let table = liked(&[(1, &[1, 1, 2])]);
        let scores = aggregate(&seeds(&[1]), &table);
        assert_eq!(scores.score(item(2)), Some(2));
    }

    #[test]
    fn repeated_candidate_likes_accumulate_per_occurrence() {
        let table = liked(&[(1, &[1, 2, 2])]);
        let scores = aggregate(&seeds(&[1]), &table);
        assert_eq!(scores.score(item(2)), Some(2));
    }

    #[test]
    fn multiple_seeds_raise_the_factor() {
        let table = liked(&[(1, &[1, 2, 3]), (2, &[1, 3])]);
        let scores = aggregate(&seeds(&[1, 2]), &table);
        // user 1 overlaps twice, user 2 once.
        assert_eq!(scores.score(item(3)), Some(3));
        assert!(!scores.contains(item(2)));
    }

    #[rstest]
    #[case::no_seeds(&[], &[(1, &[1_u64, 2][..])], 2)]
    #[case::no_users(&[1], &[], 0)]
    #[case::empty_sequence(&[1], &[(1, &[][..])], 0)]
    #[case::only_seeds(&[1, 2], &[(1, &[1_u64, 2][..])], 0)]
    fn degenerate_inputs_are_valid(
        #[case] seed_ids: &[u64],
        #[case] rows: &[(u64, &[u64])],
        #[case] expected_candidates: usize,
    ) {
        let scores = aggregate(&seeds(seed_ids), &liked(rows));
        assert_eq!(scores.len(), expected_candidates);
        assert!(scores.iter().all(|(_, score)| score == 0));
    }

    #[test]
    fn user_order_does_not_change_contents() {
        let forward = liked(&[(1, &[1, 2, 3]), (2, &[2, 4]), (3, &[1, 4, 5])]);
        let backward = liked(&[(3, &[1, 4, 5]), (2, &[2, 4]), (1, &[1, 2, 3])]);
        let seed_set = seeds(&[1]);
        assert_eq!(aggregate(&seed_set, &forward), aggregate(&seed_set, &backward));
    }

    #[test]
    fn aggregation_is_repeatable() {
        let table = liked(&[(1, &[1, 2, 3]), (2, &[2]), (3, &[1, 4])]);
        let seed_set = seeds(&[1]);
        let first = aggregate(&seed_set, &table);
        let second = aggregate(&seed_set, &table);
        assert_eq!(first, second);
        let first_order: Vec<_> = first.iter().collect();
        let second_order: Vec<_> = second.iter().collect();
        assert_eq!(first_order, second_order);
    }
}
