//! Synthetic liked-item tables.

use coreco_core::{ItemId, LikedItemsByUser, SeedSet, UserId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Shape of a synthetic ratings table.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticRatingsConfig {
    /// Number of users.
    pub user_count: usize,
    /// Number of distinct items; ids run from 1 to `item_count`.
    pub item_count: usize,
    /// Likes recorded per user.
    pub likes_per_user: usize,
    /// RNG seed, so runs are reproducible.
    pub seed: u64,
}

/// Generated table plus a seed set drawn from its most popular items.
#[derive(Clone, Debug)]
pub struct SyntheticRatings {
    liked: LikedItemsByUser,
    seeds: SeedSet,
}

impl SyntheticRatings {
    /// Generates a table where low item ids are liked more often.
    ///
    /// Each like picks the smaller of two uniform draws, giving a linear
    /// popularity slope so aggregation produces many distinct scores.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] if any count is zero.
    ///
    /// # Examples
    /// ```
    /// use coreco_benches::source::{SyntheticRatings, SyntheticRatingsConfig};
    ///
    /// let config = SyntheticRatingsConfig {
    ///     user_count: 20,
    ///     item_count: 50,
    ///     likes_per_user: 4,
    ///     seed: 7,
    /// };
    /// let ratings = SyntheticRatings::generate(&config).expect("valid config");
    /// assert_eq!(ratings.liked().user_count(), 20);
    /// assert_eq!(ratings.liked().like_count(), 80);
    /// ```
    pub fn generate(config: &SyntheticRatingsConfig) -> Result<Self, BenchSetupError> {
        require_non_zero(config.user_count, "user_count")?;
        require_non_zero(config.item_count, "item_count")?;
        require_non_zero(config.likes_per_user, "likes_per_user")?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut liked = LikedItemsByUser::new();
        for user in 1..=config.user_count {
            let items = (0..config.likes_per_user)
                .map(|_| {
                    let first = rng.gen_range(0..config.item_count);
                    let second = rng.gen_range(0..config.item_count);
                    item_id(first.min(second))
                })
                .collect();
            liked.insert_user(UserId::new(user as u64), items);
        }

        let seeds = (0..config.item_count.min(3)).map(item_id).collect();
        Ok(Self { liked, seeds })
    }

    /// The generated likes.
    #[must_use]
    pub const fn liked(&self) -> &LikedItemsByUser {
        &self.liked
    }

    /// Seeds drawn from the most popular items.
    #[must_use]
    pub const fn seeds(&self) -> &SeedSet {
        &self.seeds
    }
}

fn item_id(index: usize) -> ItemId {
    ItemId::new(index as u64 + 1)
}

fn require_non_zero(value: usize, context: &'static str) -> Result<(), BenchSetupError> {
    if value == 0 {
        return Err(BenchSetupError::ZeroValue { context });
    }
    Ok(())
}
