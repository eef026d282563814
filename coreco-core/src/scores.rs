//! The item → score table shared by the aggregator and the selector.

use std::collections::HashMap;

use crate::ids::{ItemId, Score};

/// Candidate scores keyed by item, iterated in first-discovery order.
///
/// The aggregator is the only writer. Once a [`crate::ScoreHeap`] borrows the
/// mapping it stays frozen until the heap is dropped, so heap order can never
/// go stale.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, ScoreMapping};
///
/// let mut scores = ScoreMapping::new();
/// scores.accumulate(ItemId::new(7), 2);
/// scores.accumulate(ItemId::new(3), 0);
/// scores.accumulate(ItemId::new(7), 1);
///
/// assert_eq!(scores.score(ItemId::new(7)), Some(3));
/// assert_eq!(scores.score(ItemId::new(3)), Some(0));
/// assert_eq!(scores.score(ItemId::new(1)), None);
///
/// let order: Vec<u64> = scores.iter().map(|(item, _)| item.get()).collect();
/// assert_eq!(order, vec![7, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreMapping {
    entries: Vec<(ItemId, Score)>,
    index: HashMap<ItemId, usize>,
}

impl ScoreMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `amount` to the running total of `item`, recording the item with
    /// `amount` on first sight. Totals saturate at [`Score::MAX`].
    pub fn accumulate(&mut self, item: ItemId, amount: Score) {
        match self.index.get(&item) {
            Some(&slot) => {
                if let Some((_, score)) = self.entries.get_mut(slot) {
                    *score = score.saturating_add(amount);
                }
            }
            None => {
                self.index.insert(item, self.entries.len());
                self.entries.push((item, amount));
            }
        }
    }

    /// Returns the recorded score of `item`. `Some(0)` and `None` differ: the
    /// former was liked by someone without seed overlap, the latter never.
    #[must_use]
    pub fn score(&self, item: ItemId) -> Option<Score> {
        let slot = *self.index.get(&item)?;
        self.entries.get(slot).map(|&(_, score)| score)
    }

    /// Returns whether `item` has a recorded score.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.index.contains_key(&item)
    }

    /// Number of scored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no items are scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(item, score)` in first-discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ItemId, Score)> + '_ {
        self.entries.iter().copied()
    }

    /// Drops every entry for which `keep` returns `false`, preserving the
    /// discovery order of the rest.
    pub fn retain(&mut self, mut keep: impl FnMut(ItemId, Score) -> bool) {
        self.entries.retain(|&(item, score)| keep(item, score));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, &(item, _))| (item, slot))
            .collect();
    }
}

impl PartialEq for ScoreMapping {
    /// Compares contents only; discovery order is not part of equality.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(item, score)| other.score(item) == Some(score))
    }
}

impl Eq for ScoreMapping {}

impl FromIterator<(ItemId, Score)> for ScoreMapping {
    /// Collects pairs, summing scores of repeated items.
    fn from_iter<I: IntoIterator<Item = (ItemId, Score)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (item, score) in iter {
            scores.accumulate(item, score);
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_saturates() {
        let mut scores = ScoreMapping::new();
        scores.accumulate(ItemId::new(1), Score::MAX);
        scores.accumulate(ItemId::new(1), 5);
        assert_eq!(scores.score(ItemId::new(1)), Some(Score::MAX));
    }

    #[test]
    fn equality_ignores_discovery_order() {
        let left: ScoreMapping = [(ItemId::new(1), 2), (ItemId::new(2), 3)]
            .into_iter()
            .collect();
        let right: ScoreMapping = [(ItemId::new(2), 3), (ItemId::new(1), 2)]
            .into_iter()
            .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn equality_detects_different_scores() {
        let left: ScoreMapping = [(ItemId::new(1), 2)].into_iter().collect();
        let right: ScoreMapping = [(ItemId::new(1), 3)].into_iter().collect();
        assert_ne!(left, right);
    }

    #[test]
    fn retain_reindexes_survivors() {
        let mut scores: ScoreMapping = [
            (ItemId::new(1), 0),
            (ItemId::new(2), 4),
            (ItemId::new(3), 0),
            (ItemId::new(4), 1),
        ]
        .into_iter()
        .collect();
        scores.retain(|_, score| score > 0);

        let remaining: Vec<(u64, Score)> =
            scores.iter().map(|(item, score)| (item.get(), score)).collect();
        assert_eq!(remaining, vec![(2, 4), (4, 1)]);
        assert_eq!(scores.score(ItemId::new(4)), Some(1));
        assert!(!scores.contains(ItemId::new(1)));
    }
}
