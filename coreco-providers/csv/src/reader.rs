//! Shared CSV reading helpers used by the catalog and ratings loaders.

use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::CsvProviderError;

/// Builds a header-aware reader that trims fields and tolerates ragged rows.
pub(crate) fn csv_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input)
}

/// Ensures every `required` column appears in the header row.
pub(crate) fn require_columns<R: Read>(
    reader: &mut Reader<R>,
    source_name: &str,
    required: &[&'static str],
) -> Result<(), CsvProviderError> {
    let headers = reader.headers()?;
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(CsvProviderError::MissingColumn {
                source_name: source_name.to_owned(),
                column,
            });
        }
    }
    Ok(())
}

/// Deserializes every data row, handing well-formed rows to `visit`.
///
/// Rows that fail to parse are logged and counted; I/O failures abort the
/// load. Returns the number of skipped rows.
pub(crate) fn for_each_row<R, T, F>(
    reader: &mut Reader<R>,
    source_name: &str,
    mut visit: F,
) -> Result<usize, CsvProviderError>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut(T),
{
    let headers = reader.headers()?.clone();
    let mut record = StringRecord::new();
    let mut skipped = 0_usize;
    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => match record.deserialize::<T>(Some(&headers)) {
                Ok(row) => visit(row),
                Err(err) => {
                    skipped += 1;
                    warn!(
                        source = source_name,
                        line = record.position().map(|position| position.line()),
                        error = %err,
                        "skipping malformed row",
                    );
                }
            },
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                skipped += 1;
                warn!(
                    source = source_name,
                    line = err.position().map(|position| position.line()),
                    error = %err,
                    "skipping unreadable row",
                );
            }
        }
    }
    Ok(skipped)
}
