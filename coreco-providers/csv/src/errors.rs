use thiserror::Error;

/// Errors raised while loading catalog or ratings CSV files.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CsvProviderError {
    #[error("column `{column}` not found in CSV header of `{source_name}`")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },
    #[error("catalog `{source_name}` contains no books with an ISBN")]
    EmptyCatalog { source_name: String },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when an ISBN is not a non-empty run of ASCII digits.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid ISBN `{raw}`: expected digits only")]
pub struct InvalidIsbn {
    /// Rejected input.
    pub raw: String,
}
