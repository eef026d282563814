pub(crate) use super::{Catalog, CsvProviderError, Isbn, RatingsFilter, RatingsProvider};

mod support;
