//! Bounded top-K selection over an externally owned score table.
//!
//! [`ScoreHeap`] is a min-heap of item handles that looks scores up in a
//! borrowed [`crate::ScoreMapping`]; [`TopKSelector`] drives it so that only
//! the best `k` candidates survive a single pass; the destructive drain yields
//! them from highest to lowest score.

mod heap;
mod observer;
mod top_k;

pub use heap::ScoreHeap;
pub use observer::{RankObserver, TracingObserver};
pub use top_k::{Admission, TopKSelector, select_top_k, select_top_k_with};
pub(crate) use top_k::drive;

#[cfg(test)]
mod property;
