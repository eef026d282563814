//! Array-backed binary min-heap of item handles.
//!
//! The heap stores [`ItemId`]s only and resolves every comparison through the
//! borrowed [`ScoreMapping`]. Sifting uses strict comparisons in both
//! directions and the left child wins a tie between children. Equal scores are
//! not ordered by insertion: after a removal moves the last entry to the root,
//! a later item can sit above an earlier one with the same score, so the
//! descending drain does not promise first-inserted-first among ties.

use tracing::warn;

use crate::{
    error::HeapError,
    ids::{ItemId, Score},
    scores::ScoreMapping,
};

use super::observer::RankObserver;

/// Min-heap of items ordered by their score in a shared [`ScoreMapping`].
///
/// The heap holds a shared borrow of the mapping for its whole lifetime, so
/// scores cannot change underneath it.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, ScoreHeap, ScoreMapping};
///
/// let scores: ScoreMapping = [(ItemId::new(1), 5), (ItemId::new(2), 1), (ItemId::new(3), 3)]
///     .into_iter()
///     .collect();
/// let mut heap = ScoreHeap::new(&scores);
/// for id in 1..=3 {
///     heap.insert(ItemId::new(id))?;
/// }
/// assert_eq!(heap.minimum(), Some(ItemId::new(2)));
///
/// let ranked = heap.drain_descending();
/// assert_eq!(ranked, vec![ItemId::new(1), ItemId::new(3), ItemId::new(2)]);
/// assert!(heap.is_empty());
/// assert!(heap.drain_descending().is_empty());
/// # Ok::<(), coreco_core::HeapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScoreHeap<'scores> {
    scores: &'scores ScoreMapping,
    entries: Vec<ItemId>,
}

impl<'scores> ScoreHeap<'scores> {
    /// Creates an empty heap ordered by `scores`.
    #[must_use]
    pub fn new(scores: &'scores ScoreMapping) -> Self {
        Self {
            scores,
            entries: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(scores: &'scores ScoreMapping, capacity: usize) -> Self {
        Self {
            scores,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the mapping the heap orders by.
    #[must_use]
    pub fn scores(&self) -> &'scores ScoreMapping {
        self.scores
    }

    /// Number of items currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing sequence in heap order (not sorted).
    #[must_use]
    pub fn as_slice(&self) -> &[ItemId] {
        &self.entries
    }

    /// Returns the lowest-scored item without removing it.
    #[must_use]
    pub fn minimum(&self) -> Option<ItemId> {
        self.entries.first().copied()
    }

    /// Returns the score of [`Self::minimum`].
    #[must_use]
    pub fn minimum_score(&self) -> Option<Score> {
        self.minimum().and_then(|item| self.scores.score(item))
    }

    /// Adds `item` to the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::UnscoredItem`] when `item` has no entry in the
    /// score mapping. The heap is left untouched in that case.
    pub fn insert(&mut self, item: ItemId) -> Result<(), HeapError> {
        if !self.scores.contains(item) {
            return Err(HeapError::UnscoredItem { item });
        }
        self.push_scored(item);
        Ok(())
    }

    /// Pushes an item already known to be present in the mapping.
    pub(crate) fn push_scored(&mut self, item: ItemId) {
        debug_assert!(self.scores.contains(item), "heap items must be scored");
        self.entries.push(item);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the lowest-scored item.
    ///
    /// Returns `None` on an empty heap and logs the misuse.
    pub fn remove_minimum(&mut self) -> Option<ItemId> {
        if self.entries.is_empty() {
            warn!("cannot remove minimum: heap is empty");
            return None;
        }
        let minimum = self.entries.swap_remove(0);
        self.sift_down(0);
        Some(minimum)
    }

    /// Empties the heap, returning its items from highest to lowest score.
    ///
    /// This is destructive: the heap is empty afterwards and a second call
    /// returns an empty vector.
    pub fn drain_descending(&mut self) -> Vec<ItemId> {
        let mut ranked = vec![ItemId::new(0); self.entries.len()];
        for slot in ranked.iter_mut().rev() {
            match self.remove_minimum() {
                Some(item) => *slot = item,
                None => break,
            }
        }
        ranked
    }

    /// Like [`Self::drain_descending`], reporting each ranked item to
    /// `observer` from rank 1 downwards.
    pub fn drain_descending_with(&mut self, observer: &mut dyn RankObserver) -> Vec<ItemId> {
        let ranked = self.drain_descending();
        for (position, &item) in ranked.iter().enumerate() {
            let score = self.scores.score(item).unwrap_or_default();
            observer.on_ranked(position + 1, item, score);
        }
        ranked
    }

    /// Consumes the heap, returning its items from highest to lowest score.
    #[must_use]
    pub fn into_descending(mut self) -> Vec<ItemId> {
        self.drain_descending()
    }

    fn key(&self, index: usize) -> Option<Score> {
        self.entries
            .get(index)
            .and_then(|&item| self.scores.score(item))
    }

    fn is_less(&self, left: usize, right: usize) -> bool {
        match (self.key(left), self.key(right)) {
            (Some(left), Some(right)) => left < right,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.is_less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }
            let smaller_child = if right < len && self.is_less(right, left) {
                right
            } else {
                left
            };
            if !self.is_less(smaller_child, index) {
                break;
            }
            self.entries.swap(index, smaller_child);
            index = smaller_child;
        }
    }
}
