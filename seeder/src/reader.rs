// CSV reading functions
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::errors::SeedError;

/// Read every row of the CSV file at `path`.
///
/// The first line is the header; a row that does not match `T` aborts the read.
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, SeedError> {
    read_file(path.as_ref(), None)
}

/// Read at most `limit` rows of the CSV file at `path`.
///
/// Rows past the limit are never deserialized, so they cannot fail the read.
pub fn read_records_limited<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    limit: usize,
) -> Result<Vec<T>, SeedError> {
    read_file(path.as_ref(), Some(limit))
}

/// Read every row of CSV data from `input`.
pub fn read_records_from<T: DeserializeOwned, R: Read>(input: R) -> Result<Vec<T>, SeedError> {
    let reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    collect_records(reader, None).map_err(|err| row_error(err, None))
}

fn read_file<T: DeserializeOwned>(path: &Path, limit: Option<usize>) -> Result<Vec<T>, SeedError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| SeedError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let records = collect_records(reader, limit).map_err(|err| row_error(err, Some(path)))?;
    info!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn collect_records<T: DeserializeOwned, R: Read>(
    mut reader: csv::Reader<R>,
    limit: Option<usize>,
) -> Result<Vec<T>, csv::Error> {
    reader
        .deserialize()
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Errors tied to a record become `MalformedRow` with its line number.
fn row_error(err: csv::Error, path: Option<&Path>) -> SeedError {
    let malformed = match err.kind() {
        csv::ErrorKind::Deserialize { pos: Some(pos), err } => {
            Some((pos.line(), err.to_string()))
        }
        csv::ErrorKind::UnequalLengths {
            pos: Some(pos),
            expected_len,
            len,
        } => Some((
            pos.line(),
            format!("expected {} fields, found {}", expected_len, len),
        )),
        _ => None,
    };

    match (malformed, path) {
        (Some((line, reason)), _) => SeedError::malformed_row(line as usize, reason),
        (None, Some(path)) => SeedError::Csv {
            path: path.to_path_buf(),
            source: err,
        },
        (None, None) => SeedError::CsvFormat(err),
    }
}
