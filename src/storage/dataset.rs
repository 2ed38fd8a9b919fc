use std::collections::HashSet;
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::error;

use crate::models::{RawTransaction, Transaction};
use crate::storage::errors::DatasetError;
use crate::warehouse::schema;

/// Rows read from a dataset file, before cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<RawTransaction>,
    /// Records the CSV reader could not decode; they are logged and skipped.
    pub malformed: usize
}

/// Reads every record of the dataset at `path`.
///
/// The header must only name columns known to the warehouse mapping; missing
/// columns are fine and read as empty cells.
///
/// # Errors
/// Returns `DatasetError` if the file cannot be opened, its header cannot be read,
/// or the header names an unknown or repeated column.
pub fn read_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open { path: path.to_path_buf(), source })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut seen = HashSet::new();

    for column in reader.headers()? {
        if !schema::is_known_column(column) {
            return Err(DatasetError::UnexpectedColumn { path: path.to_path_buf(), column: column.to_string() });
        }

        if !seen.insert(column.to_string()) {
            return Err(DatasetError::DuplicateColumn { path: path.to_path_buf(), column: column.to_string() });
        }
    }

    let mut dataset = Dataset::default();

    for result in reader.deserialize::<RawTransaction>() {
        match result {
            Ok(row) => dataset.rows.push(row),
            Err(error) => {
                error!("CSV deserialization error: {error}");
                dataset.malformed += 1;
            }
        }
    }

    Ok(dataset)
}

/// Writes `rows` to `path` with a header row, creating the parent directory if needed.
pub fn write_dataset(path: &Path, rows: &[Transaction]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|source| DatasetError::Create { path: path.to_path_buf(), source })?;
    let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
