//! Ranked output of a recommendation run.

use crate::ids::{ItemId, Score};

/// One ranked recommendation.
///
/// `score` is the number of overlapping users who liked the item (counted per
/// seed occurrence), so presentation layers can phrase it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    rank: usize,
    item: ItemId,
    score: Score,
}

impl Recommendation {
    /// Creates a recommendation at `rank` (starting at 1).
    #[must_use]
    pub const fn new(rank: usize, item: ItemId, score: Score) -> Self {
        Self { rank, item, score }
    }

    /// Position in the ranking, starting at 1.
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Recommended item.
    #[must_use]
    pub const fn item(&self) -> ItemId {
        self.item
    }

    /// Co-occurrence score of the item.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }
}

/// Represents the output of a [`crate::Recommender`] run.
///
/// Entries are ordered from highest to lowest score.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, Recommendation, Recommendations};
///
/// let result = Recommendations::new(
///     vec![Recommendation::new(1, ItemId::new(7), 3)],
///     4,
/// );
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.items(), vec![ItemId::new(7)]);
/// assert_eq!(result.candidate_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    entries: Vec<Recommendation>,
    candidate_count: usize,
}

impl Recommendations {
    /// Builds a result from ranked entries and the number of scored candidates
    /// they were selected from.
    #[must_use]
    pub fn new(entries: Vec<Recommendation>, candidate_count: usize) -> Self {
        Self {
            entries,
            candidate_count,
        }
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[Recommendation] {
        &self.entries
    }

    /// Recommended items, best first.
    #[must_use]
    pub fn items(&self) -> Vec<ItemId> {
        self.entries.iter().map(Recommendation::item).collect()
    }

    /// Number of candidates that were scored before selection.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Number of recommendations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing was recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ranked entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Recommendations {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Recommendations {
    type Item = Recommendation;
    type IntoIter = std::vec::IntoIter<Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
