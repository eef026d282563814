//! Coreco core library: co-occurrence recommendation over liked-item tables.
//!
//! Scores every candidate by how many users who liked the seeds also liked it
//! ([`aggregate`]), then keeps the best `k` with a bounded min-heap that orders
//! item handles by a borrowed [`ScoreMapping`] ([`select_top_k`]).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod builder;
mod error;
mod ids;
mod preferences;
mod recommender;
mod result;
mod scores;
mod selection;

#[cfg(test)]
mod test_utils;

pub use crate::{
    aggregate::aggregate,
    builder::{MAX_RESULT_COUNT, RecommenderBuilder, ZeroScorePolicy},
    error::{HeapError, HeapErrorCode, RecommendError, RecommendErrorCode, Result},
    ids::{ItemId, Score, UserId},
    preferences::{LikedItemsByUser, PreferenceSource, SeedSet},
    recommender::Recommender,
    result::{Recommendation, Recommendations},
    scores::ScoreMapping,
    selection::{
        Admission, RankObserver, ScoreHeap, TopKSelector, TracingObserver, select_top_k,
        select_top_k_with,
    },
};
