#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests loading the CSV providers from files on disk.
use std::fs;

use coreco_core::{ItemId, PreferenceSource, RecommenderBuilder, SeedSet, UserId};
use coreco_providers_csv::{Catalog, CsvProviderError, Isbn, RatingsFilter, RatingsProvider};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const BOOKS: &str = "\
book_id,isbn,authors,title,original_publication_year
1,100,Author One,First,2001.0
2,200,Author Two,Second,2002.0
3,300,Author Three,Third,
4,400,Author Four,Fourth,1999
";

const RATINGS: &str = "\
user_id,book_id,rating
1,1,5
1,2,5
2,1,5
2,3,5
3,1,5
3,3,5
4,4,5
4,2,2
";

#[fixture]
fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("temporary directory must be created");
    fs::write(dir.path().join("books.csv"), BOOKS).expect("books fixture must be written");
    fs::write(dir.path().join("ratings.csv"), RATINGS).expect("ratings fixture must be written");
    dir
}

#[rstest]
fn loads_catalog_and_ratings_from_disk(data_dir: TempDir) {
    let catalog =
        Catalog::try_from_path("books", data_dir.path().join("books.csv")).expect("catalog loads");
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.item_for_isbn(Isbn::new(300)), Some(ItemId::new(3)));
    assert_eq!(catalog.book(ItemId::new(3)).map(|book| book.year()), Some(0));

    let ratings = RatingsProvider::try_from_path(
        "ratings",
        data_dir.path().join("ratings.csv"),
        &catalog,
        &RatingsFilter::default(),
    )
    .expect("ratings load");
    assert_eq!(ratings.liked_items().user_count(), 4);
    assert_eq!(ratings.filtered_rows(), 1);
    assert_eq!(
        ratings.liked_items().items_of(UserId::new(4)),
        Some(&[ItemId::new(4)][..])
    );
}

#[rstest]
fn recommends_from_loaded_files(data_dir: TempDir) {
    let catalog =
        Catalog::try_from_path("books", data_dir.path().join("books.csv")).expect("catalog loads");
    let ratings = RatingsProvider::try_from_path(
        "ratings",
        data_dir.path().join("ratings.csv"),
        &catalog,
        &RatingsFilter::default(),
    )
    .expect("ratings load");
    let seed = catalog
        .item_for_isbn(Isbn::new(100))
        .expect("ISBN 100 is catalogued");
    let seeds: SeedSet = [seed].into_iter().collect();

    let result = RecommenderBuilder::new()
        .with_result_count(2)
        .build()
        .expect("count valid")
        .recommend(&ratings, &seeds)
        .expect("ratings have users");
    let titles: Vec<&str> = result
        .iter()
        .filter_map(|entry| catalog.book(entry.item()))
        .map(|book| book.title())
        .collect();
    assert_eq!(titles, vec!["Third", "Second"]);
}

#[rstest]
fn missing_file_is_an_io_error(data_dir: TempDir) {
    let err = Catalog::try_from_path("books", data_dir.path().join("absent.csv"))
        .expect_err("absent file must fail");
    assert!(matches!(err, CsvProviderError::Io(_)));
}
