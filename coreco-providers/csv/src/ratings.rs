//! Ratings table reduced to the strong positive signal the core consumes.

use std::{fs::File, io::Read, path::Path};

use coreco_core::{ItemId, LikedItemsByUser, PreferenceSource, UserId};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    catalog::Catalog,
    errors::CsvProviderError,
    reader::{csv_reader, for_each_row, require_columns},
};

const REQUIRED_COLUMNS: &[&str] = &["user_id", "book_id", "rating"];

/// Decides which ratings count as a "like".
///
/// # Examples
/// ```
/// use coreco_providers_csv::RatingsFilter;
///
/// let filter = RatingsFilter::default();
/// assert_eq!(filter.min_rating(), 5);
/// assert!(filter.accepts(5));
/// assert!(!filter.accepts(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingsFilter {
    min_rating: u8,
}

impl Default for RatingsFilter {
    fn default() -> Self {
        Self { min_rating: 5 }
    }
}

impl RatingsFilter {
    /// Creates a filter keeping ratings of at least `min_rating`.
    #[must_use]
    pub const fn with_min_rating(min_rating: u8) -> Self {
        Self { min_rating }
    }

    #[must_use]
    pub const fn min_rating(&self) -> u8 {
        self.min_rating
    }

    /// Returns whether `rating` is a like.
    #[must_use]
    pub const fn accepts(&self, rating: u8) -> bool {
        rating >= self.min_rating
    }
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    user_id: u64,
    book_id: u64,
    rating: u8,
}

/// Liked books per user, read from a ratings CSV.
#[derive(Debug, Clone)]
pub struct RatingsProvider {
    name: String,
    liked: LikedItemsByUser,
    skipped_rows: usize,
    filtered_rows: usize,
}

impl RatingsProvider {
    /// Loads ratings from a CSV file.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Io`] when the file cannot be opened, plus
    /// every error documented on [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        catalog: &Catalog,
        filter: &RatingsFilter,
    ) -> Result<Self, CsvProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, file, catalog, filter)
    }

    /// Loads ratings from any reader producing CSV with a header row.
    ///
    /// Keeps rows accepted by `filter` whose book is in `catalog`, grouped by
    /// user in file order. Malformed rows are skipped with a warning.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::MissingColumn`] when a required column is
    /// absent and [`CsvProviderError::Io`] or [`CsvProviderError::Csv`] when
    /// the input cannot be read.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use coreco_core::{ItemId, PreferenceSource, UserId};
    /// use coreco_providers_csv::{Catalog, RatingsFilter, RatingsProvider};
    ///
    /// let books = "book_id,isbn,authors,title\n1,11,A,One\n2,22,B,Two\n";
    /// let catalog = Catalog::try_from_reader("books", Cursor::new(books))?;
    /// let ratings = "user_id,book_id,rating\n7,1,5\n7,2,3\n7,9,5\n";
    /// let provider = RatingsProvider::try_from_reader(
    ///     "ratings",
    ///     Cursor::new(ratings),
    ///     &catalog,
    ///     &RatingsFilter::default(),
    /// )?;
    /// assert_eq!(
    ///     provider.liked_items().items_of(UserId::new(7)),
    ///     Some(&[ItemId::new(1)][..]),
    /// );
    /// # Ok::<(), coreco_providers_csv::CsvProviderError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        catalog: &Catalog,
        filter: &RatingsFilter,
    ) -> Result<Self, CsvProviderError> {
        Self::load(name.into(), reader, catalog, filter)
    }

    #[instrument(
        name = "provider.ratings",
        err,
        skip(input, catalog, filter),
        fields(source = %name, min_rating = filter.min_rating()),
    )]
    fn load<R: Read>(
        name: String,
        input: R,
        catalog: &Catalog,
        filter: &RatingsFilter,
    ) -> Result<Self, CsvProviderError> {
        let mut reader = csv_reader(input);
        require_columns(&mut reader, &name, REQUIRED_COLUMNS)?;

        let mut liked = LikedItemsByUser::new();
        let mut filtered_rows = 0_usize;
        let skipped_rows = for_each_row(&mut reader, &name, |row: RatingRow| {
            let item = ItemId::new(row.book_id);
            if !filter.accepts(row.rating) || !catalog.contains(item) {
                filtered_rows += 1;
                return;
            }
            liked.record(UserId::new(row.user_id), item);
        })?;

        debug!(
            users = liked.user_count(),
            likes = liked.like_count(),
            filtered_rows,
            skipped_rows,
            "ratings loaded"
        );
        Ok(Self {
            name,
            liked,
            skipped_rows,
            filtered_rows,
        })
    }

    /// Rows skipped because they could not be parsed.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Well-formed rows dropped by the rating threshold or an unknown book.
    #[must_use]
    pub fn filtered_rows(&self) -> usize {
        self.filtered_rows
    }

    /// Consumes the provider, returning the liked-items table.
    #[must_use]
    pub fn into_liked_items(self) -> LikedItemsByUser {
        self.liked
    }
}

impl PreferenceSource for RatingsProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn liked_items(&self) -> &LikedItemsByUser {
        &self.liked
    }
}
