//! Benchmark parameter labels.

use std::fmt;

/// Parameters identifying one benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct RecommendBenchParams {
    /// Number of users in the table.
    pub user_count: usize,
    /// Number of distinct items users can like.
    pub item_count: usize,
    /// Requested result count.
    pub result_count: usize,
}

impl fmt::Display for RecommendBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "users={},items={},k={}",
            self.user_count, self.item_count, self.result_count
        )
    }
}
