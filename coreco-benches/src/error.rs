//! Benchmark setup error type.

use coreco_core::RecommendError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic ratings generation was misconfigured.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// Building or running the recommender failed.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
}
