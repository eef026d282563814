//! Hooks for inspecting a ranking as it is drained.

use tracing::debug;

use crate::ids::{ItemId, Score};

/// Receives each ranked item when a heap is drained.
///
/// Ranks start at 1 for the highest-scored item.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, RankObserver, Score};
///
/// #[derive(Default)]
/// struct Collect(Vec<(usize, u64, Score)>);
///
/// impl RankObserver for Collect {
///     fn on_ranked(&mut self, rank: usize, item: ItemId, score: Score) {
///         self.0.push((rank, item.get(), score));
///     }
/// }
///
/// let mut observer = Collect::default();
/// observer.on_ranked(1, ItemId::new(9), 4);
/// assert_eq!(observer.0, vec![(1, 9, 4)]);
/// ```
pub trait RankObserver {
    /// Called once per ranked item, in rank order.
    fn on_ranked(&mut self, rank: usize, item: ItemId, score: Score);
}

/// Observer that emits one `debug` event per ranked item.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RankObserver for TracingObserver {
    fn on_ranked(&mut self, rank: usize, item: ItemId, score: Score) {
        debug!(
            rank,
            item = item.get(),
            score,
            "{score} users who liked the seeds also liked this item"
        );
    }
}

impl<F> RankObserver for F
where
    F: FnMut(usize, ItemId, Score),
{
    fn on_ranked(&mut self, rank: usize, item: ItemId, score: Score) {
        self(rank, item, score);
    }
}
