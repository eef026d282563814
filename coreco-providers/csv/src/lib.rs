//! CSV providers for the book catalog and the ratings table.
//!
//! [`Catalog`] resolves ISBNs to item identifiers and carries the metadata used
//! for rendering; [`RatingsProvider`] turns strong positive ratings into the
//! per-user liked-items table the core aggregates over.

mod catalog;
mod errors;
mod ratings;
mod reader;

pub use catalog::{Book, Catalog, Isbn};
pub use errors::{CsvProviderError, InvalidIsbn};
pub use ratings::{RatingsFilter, RatingsProvider};

#[cfg(test)]
mod tests;
