//! Request inputs: the seed set and the liked-items table, plus the
//! [`PreferenceSource`] abstraction providers implement.

use std::collections::{HashMap, HashSet};

use crate::ids::{ItemId, UserId};

/// Items the requester chose as the basis for similarity.
///
/// Duplicates collapse; membership is the only property that matters.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, SeedSet};
///
/// let seeds: SeedSet = [ItemId::new(1), ItemId::new(1), ItemId::new(3)]
///     .into_iter()
///     .collect();
/// assert_eq!(seeds.len(), 2);
/// assert!(seeds.contains(ItemId::new(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    items: HashSet<ItemId>,
}

impl SeedSet {
    /// Creates an empty seed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `item` was chosen as a seed.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Number of distinct seed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether no seeds were chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the seed items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }
}

impl FromIterator<ItemId> for SeedSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Liked items grouped by user, in the order users were first recorded.
///
/// Each user maps to the ordered sequence of items that passed the upstream
/// positive-signal filter. Repeated items are kept; the aggregator counts
/// every occurrence.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, LikedItemsByUser, UserId};
///
/// let mut liked = LikedItemsByUser::new();
/// liked.record(UserId::new(1), ItemId::new(10));
/// liked.record(UserId::new(2), ItemId::new(11));
/// liked.record(UserId::new(1), ItemId::new(12));
///
/// assert_eq!(liked.user_count(), 2);
/// assert_eq!(
///     liked.items_of(UserId::new(1)),
///     Some(&[ItemId::new(10), ItemId::new(12)][..]),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedItemsByUser {
    order: Vec<UserId>,
    items: HashMap<UserId, Vec<ItemId>>,
}

impl LikedItemsByUser {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the sequence liked by `user`, registering the user on
    /// first sight.
    pub fn record(&mut self, user: UserId, item: ItemId) {
        self.items_mut(user).push(item);
    }

    /// Replaces the whole liked sequence of `user`.
    pub fn insert_user(&mut self, user: UserId, items: Vec<ItemId>) {
        *self.items_mut(user) = items;
    }

    fn items_mut(&mut self, user: UserId) -> &mut Vec<ItemId> {
        self.items.entry(user).or_insert_with(|| {
            self.order.push(user);
            Vec::new()
        })
    }

    /// Returns the liked sequence of `user`, if the user was recorded.
    #[must_use]
    pub fn items_of(&self, user: UserId) -> Option<&[ItemId]> {
        self.items.get(&user).map(Vec::as_slice)
    }

    /// Number of users recorded.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no users were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of liked entries across all users.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Iterates over `(user, liked items)` in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &[ItemId])> + '_ {
        self.order
            .iter()
            .filter_map(|&user| self.items.get(&user).map(|items| (user, items.as_slice())))
    }
}

impl<I> FromIterator<(UserId, I)> for LikedItemsByUser
where
    I: IntoIterator<Item = ItemId>,
{
    fn from_iter<T: IntoIterator<Item = (UserId, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (user, items) in iter {
            table.items_mut(user).extend(items);
        }
        table
    }
}

/// Abstraction over a supplier of per-user liked items.
///
/// # Examples
/// ```
/// use coreco_core::{ItemId, LikedItemsByUser, PreferenceSource, UserId};
///
/// struct Fixed(LikedItemsByUser);
///
/// impl PreferenceSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn liked_items(&self) -> &LikedItemsByUser { &self.0 }
/// }
///
/// let liked: LikedItemsByUser = [(UserId::new(1), vec![ItemId::new(2)])]
///     .into_iter()
///     .collect();
/// let source = Fixed(liked);
/// assert_eq!(source.name(), "fixed");
/// assert!(!source.is_empty());
/// ```
pub trait PreferenceSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the liked-items table the aggregator scans.
    fn liked_items(&self) -> &LikedItemsByUser;

    /// Returns whether the source recorded no users.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.liked_items().is_empty()
    }
}

impl PreferenceSource for LikedItemsByUser {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn liked_items(&self) -> &LikedItemsByUser {
        self
    }
}
