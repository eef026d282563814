//! Bounded top-K retention driven by a single pass over a score table.

use tracing::{debug, instrument};

use crate::{ids::ItemId, scores::ScoreMapping};

use super::{heap::ScoreHeap, observer::RankObserver};

/// Outcome of offering a candidate to a [`TopKSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The candidate did not beat the current minimum and was not inserted.
    Rejected,
    /// The candidate was inserted and nothing was evicted.
    Admitted,
    /// The candidate was inserted and the previous minimum was evicted. The
    /// evicted item may be the candidate itself.
    Replaced {
        /// Item removed to restore the capacity bound.
        evicted: ItemId,
    },
}

/// Keeps the `capacity` best candidates seen so far.
///
/// A candidate is admitted only when its score is strictly greater than the
/// score of the current minimum (an empty heap admits anything). Admission
/// past `capacity` evicts the minimum.
///
/// A candidate that only equals the current minimum is rejected, so it never
/// displaces a retained item with the same score: at the admission boundary
/// the first-seen item wins. The drained order of equal-scored survivors
/// follows heap layout, not discovery order.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, ScoreMapping, TopKSelector};
///
/// let scores: ScoreMapping = [
///     (ItemId::new(1), 5),
///     (ItemId::new(2), 5),
///     (ItemId::new(3), 3),
///     (ItemId::new(4), 7),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut selector = TopKSelector::new(&scores, 2);
/// for (item, _) in scores.iter() {
///     selector.offer(item);
/// }
/// assert_eq!(selector.into_descending(), vec![ItemId::new(4), ItemId::new(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct TopKSelector<'scores> {
    heap: ScoreHeap<'scores>,
    capacity: usize,
}

impl<'scores> TopKSelector<'scores> {
    /// Creates a selector retaining at most `capacity` items of `scores`.
    #[must_use]
    pub fn new(scores: &'scores ScoreMapping, capacity: usize) -> Self {
        let reserved = capacity.saturating_add(1).min(scores.len());
        Self {
            heap: ScoreHeap::with_capacity(scores, reserved),
            capacity,
        }
    }

    /// Maximum number of retained items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Read access to the underlying heap.
    #[must_use]
    pub fn heap(&self) -> &ScoreHeap<'scores> {
        &self.heap
    }

    /// Offers `item`, looking its score up in the selector's mapping.
    ///
    /// Items missing from the mapping are rejected.
    pub fn offer(&mut self, item: ItemId) -> Admission {
        let Some(score) = self.heap.scores().score(item) else {
            return Admission::Rejected;
        };
        if self
            .heap
            .minimum_score()
            .is_some_and(|minimum| score <= minimum)
        {
            return Admission::Rejected;
        }
        self.heap.push_scored(item);
        if self.heap.len() > self.capacity {
            match self.heap.remove_minimum() {
                Some(evicted) => Admission::Replaced { evicted },
                None => Admission::Admitted,
            }
        } else {
            Admission::Admitted
        }
    }

    /// Drains the retained items from highest to lowest score.
    pub fn drain_descending(&mut self) -> Vec<ItemId> {
        self.heap.drain_descending()
    }

    /// Drains the retained items, reporting each to `observer`.
    pub fn drain_descending_with(&mut self, observer: &mut dyn RankObserver) -> Vec<ItemId> {
        self.heap.drain_descending_with(observer)
    }

    /// Consumes the selector, returning the retained items from highest to
    /// lowest score.
    #[must_use]
    pub fn into_descending(self) -> Vec<ItemId> {
        self.heap.into_descending()
    }
}

/// Selects the `k` best items of `scores` in descending score order.
///
/// Walks the mapping once in discovery order, offering every entry to a
/// [`TopKSelector`]. `k == 0` selects nothing.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, ScoreMapping, select_top_k};
///
/// let scores: ScoreMapping = [(ItemId::new(1), 1), (ItemId::new(2), 3), (ItemId::new(3), 2)]
///     .into_iter()
///     .collect();
/// assert_eq!(
///     select_top_k(&scores, 5),
///     vec![ItemId::new(2), ItemId::new(3), ItemId::new(1)],
/// );
/// assert!(select_top_k(&scores, 0).is_empty());
/// ```
#[must_use]
pub fn select_top_k(scores: &ScoreMapping, k: usize) -> Vec<ItemId> {
    drive(scores, k).into_descending()
}

/// Like [`select_top_k`], reporting each selected item to `observer`.
pub fn select_top_k_with(
    scores: &ScoreMapping,
    k: usize,
    observer: &mut dyn RankObserver,
) -> Vec<ItemId> {
    drive(scores, k).drain_descending_with(observer)
}

/// Offers every entry of `scores`, in discovery order, to a fresh selector.
#[instrument(name = "core.select", skip(scores), fields(candidates = scores.len()))]
pub(crate) fn drive(scores: &ScoreMapping, k: usize) -> TopKSelector<'_> {
    let mut selector = TopKSelector::new(scores, k);
    if k == 0 {
        debug!("result count is zero, skipping selection");
        return selector;
    }
    let mut evictions = 0_usize;
    for (item, _) in scores.iter() {
        if let Admission::Replaced { .. } = selector.offer(item) {
            evictions += 1;
        }
    }
    debug!(retained = selector.len(), evictions, "selection pass completed");
    selector
}
