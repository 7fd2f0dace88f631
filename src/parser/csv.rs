use crate::error::LoadError;
use crate::model::Record;
use std::path::Path;

const DELIMITER: u8 = b';';

/// Reads a semicolon-delimited CSV file with a header row.
///
/// Values are matched to fields by header name, so column order does not
/// matter and extra columns are ignored. A header without one of `city`,
/// `street`, `house` or `floor` gives that field the value
/// [`UNKNOWN`](crate::model::UNKNOWN) in every row.
///
/// # Errors
///
/// Returns [`LoadError::Csv`] if the file cannot be opened, is not valid
/// UTF-8, or any row is malformed. No partial results are returned.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path_ref = path.as_ref();
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path_ref.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_path(path_ref)
        .map_err(csv_error)?;

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_error)?;

    log::debug!("read {} CSV rows from {}", records.len(), path_ref.display());
    Ok(records)
}
