//! Recommendation orchestration for the coreco library.
//!
//! Provides the [`Recommender`] entry point that turns a preference source and
//! a seed set into a ranked list: aggregate co-occurrence scores, select the
//! best `k` candidates and drain them in descending order.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    aggregate::aggregate,
    builder::ZeroScorePolicy,
    error::RecommendError,
    ids::{ItemId, Score},
    preferences::{PreferenceSource, SeedSet},
    result::{Recommendation, Recommendations},
    scores::ScoreMapping,
    selection::{RankObserver, drive},
};

/// Entry point for producing recommendations.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, LikedItemsByUser, RecommenderBuilder, SeedSet, UserId};
///
/// let liked: LikedItemsByUser = [
///     (UserId::new(1), vec![ItemId::new(1), ItemId::new(2), ItemId::new(3)]),
///     (UserId::new(2), vec![ItemId::new(1), ItemId::new(4)]),
/// ]
/// .into_iter()
/// .collect();
/// let seeds: SeedSet = [ItemId::new(1)].into_iter().collect();
///
/// let recommender = RecommenderBuilder::new()
///     .with_result_count(5)
///     .build()
///     .expect("builder must succeed");
/// let result = recommender.recommend(&liked, &seeds)?;
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.items(), vec![ItemId::new(2)]);
/// # Ok::<(), coreco_core::RecommendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    result_count: usize,
    zero_score_policy: ZeroScorePolicy,
}

impl Recommender {
    pub(crate) fn new(result_count: usize, zero_score_policy: ZeroScorePolicy) -> Self {
        Self {
            result_count,
            zero_score_policy,
        }
    }

    /// Returns the number of recommendations requested per run.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.result_count
    }

    /// Returns how zero-scored candidates are treated.
    #[must_use]
    pub fn zero_score_policy(&self) -> ZeroScorePolicy {
        self.zero_score_policy
    }

    /// Recommends items for `seeds` from the likes recorded in `source`.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptySource`] when `source` recorded no
    /// users.
    pub fn recommend<P: PreferenceSource + ?Sized>(
        &self,
        source: &P,
        seeds: &SeedSet,
    ) -> Result<Recommendations> {
        self.recommend_with(source, seeds, &mut silent)
    }

    /// Like [`Self::recommend`], reporting each ranked item to `observer`.
    ///
    /// Pass [`crate::TracingObserver`] to trace every ranked item at `debug`
    /// level.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptySource`] when `source` recorded no
    /// users.
    #[instrument(
        name = "core.recommend",
        err,
        skip(self, source, seeds, observer),
        fields(
            source = %source.name(),
            users = source.liked_items().user_count(),
            seeds = seeds.len(),
            result_count = self.result_count,
            zero_scores = ?self.zero_score_policy,
        ),
    )]
    pub fn recommend_with<P: PreferenceSource + ?Sized>(
        &self,
        source: &P,
        seeds: &SeedSet,
        observer: &mut dyn RankObserver,
    ) -> Result<Recommendations> {
        if source.is_empty() {
            warn!(
                source = source.name(),
                "preference source is empty, returning error"
            );
            return Err(RecommendError::EmptySource {
                source_name: Arc::from(source.name()),
            });
        }
        if seeds.is_empty() {
            debug!("no seeds supplied, every overlap factor is zero");
        }
        let scores = aggregate(seeds, source.liked_items());
        Ok(self.rank(scores, observer))
    }

    /// Selects and ranks candidates from an already computed mapping.
    ///
    /// The zero-score policy still applies.
    ///
    /// # Examples
    /// ```
    /// use coreco_core::{ItemId, RecommenderBuilder, ScoreMapping};
    ///
    /// let scores: ScoreMapping = [(ItemId::new(1), 2), (ItemId::new(2), 6)]
    ///     .into_iter()
    ///     .collect();
    /// let result = RecommenderBuilder::new()
    ///     .build()
    ///     .expect("defaults are valid")
    ///     .recommend_from_scores(scores);
    /// assert_eq!(result.items(), vec![ItemId::new(2), ItemId::new(1)]);
    /// assert_eq!(result.entries()[0].score(), 6);
    /// ```
    #[must_use]
    #[instrument(
        name = "core.recommend_from_scores",
        skip(self, scores),
        fields(candidates = scores.len(), result_count = self.result_count),
    )]
    pub fn recommend_from_scores(&self, scores: ScoreMapping) -> Recommendations {
        self.rank(scores, &mut silent)
    }

    fn rank(&self, mut scores: ScoreMapping, observer: &mut dyn RankObserver) -> Recommendations {
        if self.zero_score_policy == ZeroScorePolicy::Drop {
            let before = scores.len();
            scores.retain(|_, score| score > 0);
            debug!(dropped = before - scores.len(), "dropped zero-score candidates");
        }
        let candidate_count = scores.len();

        let mut selector = drive(&scores, self.result_count);

        let mut entries = Vec::with_capacity(selector.len());
        let mut collect = |rank: usize, item: ItemId, score: Score| {
            observer.on_ranked(rank, item, score);
            entries.push(Recommendation::new(rank, item, score));
        };
        selector.drain_descending_with(&mut collect);

        debug!(
            candidates = candidate_count,
            returned = entries.len(),
            "recommendation run completed"
        );
        Recommendations::new(entries, candidate_count)
    }
}

fn silent(_rank: usize, _item: ItemId, _score: Score) {}
