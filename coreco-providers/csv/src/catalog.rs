//! Book catalog loaded from a CSV file.

use std::{collections::HashMap, fmt, fs::File, io::Read, path::Path, str::FromStr};

use coreco_core::ItemId;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    errors::{CsvProviderError, InvalidIsbn},
    reader::{csv_reader, for_each_row, require_columns},
};

const REQUIRED_COLUMNS: &[&str] = &["book_id", "isbn", "authors", "title"];

/// International Standard Book Number, stored as its numeric value.
///
/// # Examples
/// ```
/// use coreco_providers_csv::Isbn;
///
/// let isbn: Isbn = "439023483".parse().expect("digits parse");
/// assert_eq!(isbn.get(), 439_023_483);
/// assert!("43902348X".parse::<Isbn>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Isbn(u64);

impl Isbn {
    /// Wraps a numeric ISBN.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Isbn {
    type Err = InvalidIsbn;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let invalid = || InvalidIsbn {
            raw: raw.to_owned(),
        };
        if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        trimmed.parse().map(Self).map_err(|_| invalid())
    }
}

/// Catalog metadata for one book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    id: ItemId,
    isbn: Isbn,
    authors: String,
    title: String,
    year: i32,
    image_url: Option<String>,
}

impl Book {
    /// Item identifier used by the ratings table.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn isbn(&self) -> Isbn {
        self.isbn
    }

    #[must_use]
    pub fn authors(&self) -> &str {
        &self.authors
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Original publication year; 0 when unknown.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct BookRow {
    book_id: u64,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    authors: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    original_publication_year: String,
    #[serde(default)]
    image_url: String,
}

/// Books indexed by item identifier and by ISBN.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    books: HashMap<ItemId, Book>,
    by_isbn: HashMap<Isbn, ItemId>,
    skipped_rows: usize,
}

impl Catalog {
    /// Loads a catalog from a CSV file.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Io`] when the file cannot be opened, plus
    /// every error documented on [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, CsvProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, file)
    }

    /// Loads a catalog from any reader producing CSV with a header row.
    ///
    /// Rows without an ISBN are skipped silently; rows that fail to parse are
    /// skipped with a warning and counted in [`Self::skipped_rows`].
    ///
    /// # Errors
    /// Returns [`CsvProviderError::MissingColumn`] when a required column is
    /// absent from the header, [`CsvProviderError::EmptyCatalog`] when no book
    /// survives parsing, and [`CsvProviderError::Io`] or
    /// [`CsvProviderError::Csv`] when the input cannot be read.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use coreco_core::ItemId;
    /// use coreco_providers_csv::{Catalog, Isbn};
    ///
    /// let csv = "book_id,isbn,authors,title,original_publication_year\n\
    ///            1,439023483,Suzanne Collins,The Hunger Games,2008.0\n\
    ///            2,,Nobody,No ISBN,\n";
    /// let catalog = Catalog::try_from_reader("books", Cursor::new(csv))?;
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.item_for_isbn(Isbn::new(439_023_483)), Some(ItemId::new(1)));
    /// let book = catalog.book(ItemId::new(1)).expect("book 1 is loaded");
    /// assert_eq!(book.year(), 2008);
    /// # Ok::<(), coreco_providers_csv::CsvProviderError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, CsvProviderError> {
        Self::load(name.into(), reader)
    }

    #[instrument(name = "provider.catalog", err, skip(input), fields(source = %name))]
    fn load<R: Read>(name: String, input: R) -> Result<Self, CsvProviderError> {
        let mut reader = csv_reader(input);
        require_columns(&mut reader, &name, REQUIRED_COLUMNS)?;

        let mut books = HashMap::new();
        let mut by_isbn = HashMap::new();
        let mut without_isbn = 0_usize;
        let mut invalid_isbn = 0_usize;
        let skipped = for_each_row(&mut reader, &name, |row: BookRow| {
            if row.isbn.is_empty() {
                without_isbn += 1;
                return;
            }
            let isbn = match row.isbn.parse::<Isbn>() {
                Ok(isbn) => isbn,
                Err(err) => {
                    invalid_isbn += 1;
                    warn!(source = %name, book_id = row.book_id, error = %err, "skipping book");
                    return;
                }
            };
            let book = Book {
                id: ItemId::new(row.book_id),
                isbn,
                authors: row.authors,
                title: row.title,
                year: parse_year(&row.original_publication_year),
                image_url: Some(row.image_url).filter(|url| !url.is_empty()),
            };
            by_isbn.insert(isbn, book.id);
            books.insert(book.id, book);
        })?;

        if books.is_empty() {
            return Err(CsvProviderError::EmptyCatalog { source_name: name });
        }
        debug!(
            books = books.len(),
            without_isbn,
            skipped = skipped + invalid_isbn,
            "catalog loaded"
        );
        Ok(Self {
            name,
            books,
            by_isbn,
            skipped_rows: skipped + invalid_isbn,
        })
    }

    /// Returns the catalog's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of books with an ISBN.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the catalog holds no books. Loaded catalogs never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Resolves an ISBN to the book's item identifier.
    #[must_use]
    pub fn item_for_isbn(&self, isbn: Isbn) -> Option<ItemId> {
        self.by_isbn.get(&isbn).copied()
    }

    /// Returns the metadata for `item`.
    #[must_use]
    pub fn book(&self, item: ItemId) -> Option<&Book> {
        self.books.get(&item)
    }

    /// Returns whether `item` is a catalogued book.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.books.contains_key(&item)
    }

    /// Rows skipped because they could not be parsed.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Parses a publication year such as `2008`, `2008.0` or `-720.0`.
///
/// Empty or unparsable values yield 0.
pub(crate) fn parse_year(raw: &str) -> i32 {
    let whole = raw.split('.').next().unwrap_or_default().trim();
    whole.parse().unwrap_or(0)
}
