use coreco_core::{ItemId, LikedItemsByUser, PreferenceSource, UserId};

/// Preference source backed by an in-memory table with a fixed name.
#[derive(Clone)]
pub struct Fixture {
    liked: LikedItemsByUser,
}

impl Fixture {
    #[must_use]
    pub fn new(rows: &[(u64, &[u64])]) -> Self {
        let liked = rows
            .iter()
            .map(|&(user, items)| {
                (
                    UserId::new(user),
                    items.iter().copied().map(ItemId::new).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { liked }
    }
}

impl PreferenceSource for Fixture {
    fn name(&self) -> &str {
        "fixture"
    }

    fn liked_items(&self) -> &LikedItemsByUser {
        &self.liked
    }
}

#[must_use]
pub fn ids(items: &[ItemId]) -> Vec<u64> {
    items.iter().map(|item| item.get()).collect()
}
