//! Builder utilities for configuring recommendation runs.
//!
//! Exposes the zero-score policy and the builder validation used before
//! constructing [`Recommender`] instances.

use crate::{Result, error::RecommendError, recommender::Recommender};

/// Largest result count accepted by [`RecommenderBuilder::build`].
pub const MAX_RESULT_COUNT: usize = 1_000_000;

/// Decides what happens to candidates that were recorded with a zero score.
///
/// Candidates liked only by users who liked none of the seeds still receive an
/// entry in the score mapping. `Keep` lets them compete in selection like any
/// other candidate; `Drop` removes them first.
///
/// # Examples
/// ```
/// use coreco_core::ZeroScorePolicy;
///
/// assert_eq!(ZeroScorePolicy::default(), ZeroScorePolicy::Keep);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroScorePolicy {
    /// Zero-scored candidates stay eligible.
    #[default]
    Keep,
    /// Zero-scored candidates are removed before selection.
    Drop,
}

/// Configures and constructs [`Recommender`] instances.
///
/// # Examples
/// ```
/// use coreco_core::{RecommenderBuilder, ZeroScorePolicy};
///
/// let recommender = RecommenderBuilder::new()
///     .with_result_count(3)
///     .with_zero_score_policy(ZeroScorePolicy::Drop)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(recommender.result_count(), 3);
/// assert_eq!(recommender.zero_score_policy(), ZeroScorePolicy::Drop);
/// ```
#[derive(Debug, Clone)]
pub struct RecommenderBuilder {
    result_count: usize,
    zero_score_policy: ZeroScorePolicy,
}

impl Default for RecommenderBuilder {
    fn default() -> Self {
        Self {
            result_count: 10,
            zero_score_policy: ZeroScorePolicy::Keep,
        }
    }
}

impl RecommenderBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use coreco_core::{RecommenderBuilder, ZeroScorePolicy};
    ///
    /// let builder = RecommenderBuilder::new();
    /// assert_eq!(builder.result_count(), 10);
    /// assert_eq!(builder.zero_score_policy(), ZeroScorePolicy::Keep);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of recommendations to return.
    ///
    /// Zero is accepted and yields empty results.
    #[must_use]
    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    /// Returns the configured result count.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.result_count
    }

    /// Sets how zero-scored candidates are treated.
    #[must_use]
    pub fn with_zero_score_policy(mut self, policy: ZeroScorePolicy) -> Self {
        self.zero_score_policy = policy;
        self
    }

    /// Returns the configured zero-score policy.
    #[must_use]
    pub fn zero_score_policy(&self) -> ZeroScorePolicy {
        self.zero_score_policy
    }

    /// Validates the configuration and constructs a [`Recommender`].
    ///
    /// # Errors
    /// Returns [`RecommendError::ResultCountTooLarge`] when the result count
    /// exceeds [`MAX_RESULT_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use coreco_core::{MAX_RESULT_COUNT, RecommendError, RecommenderBuilder};
    ///
    /// let err = RecommenderBuilder::new()
    ///     .with_result_count(MAX_RESULT_COUNT + 1)
    ///     .build()
    ///     .expect_err("oversized result count must be rejected");
    /// assert!(matches!(err, RecommendError::ResultCountTooLarge { .. }));
    /// ```
    pub fn build(self) -> Result<Recommender> {
        if self.result_count > MAX_RESULT_COUNT {
            return Err(RecommendError::ResultCountTooLarge {
                got: self.result_count,
                max: MAX_RESULT_COUNT,
            });
        }
        Ok(Recommender::new(self.result_count, self.zero_score_policy))
    }
}
