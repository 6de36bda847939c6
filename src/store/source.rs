//! Shared machinery for reading one tabular source file. Both content files
//! use the same comma-separated layout with a header row, so the row-level
//! policies live here once: a file-level problem surfaces as a [`LoadError`]
//! for the caller to classify, while an individual unreadable row is dropped
//! and counted without dragging down its neighbors.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// File-level reasons a source contributes nothing. These never escape the
/// store as failures; [`ContentStore::load`](super::ContentStore::load) turns
/// them into footer notes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),

    #[error("{} is missing its '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone)]
/// Result of reading one source: the rows that parsed plus how many did not.
pub struct Loaded<T> {
    /// Successfully parsed records in file order.
    pub records: Vec<T>,
    /// Rows dropped by the skip-and-continue policy.
    pub skipped: usize,
}

/// Read every record of one source file. The header row must contain
/// `required_column` (the column that makes the file recognizably the right
/// one); without it the whole file is rejected rather than deserialized into
/// rows of empty strings. Header names are matched exactly after trimming,
/// the same case-sensitive contract the field mapping uses. Rows that fail to
/// parse, a field of invalid UTF-8 for example, are skipped and counted while
/// the surrounding rows load normally.
pub(super) fn read_records<T: DeserializeOwned>(
    path: &Path,
    required_column: &'static str,
) -> Result<Loaded<T>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }

    let unreadable = |source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(unreadable)?;

    let headers = reader.headers().map_err(unreadable)?;
    if !headers.iter().any(|header| header == required_column) {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: required_column,
        });
    }

    let mut records = Vec::new();
    let mut skipped = 0;
    for row in reader.deserialize::<T>() {
        match row {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }

    Ok(Loaded { records, skipped })
}
