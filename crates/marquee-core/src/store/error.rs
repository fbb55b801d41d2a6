//! Store load error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a data file.
///
/// Callers normally never see these: `MovieStore::load` and
/// `JsonReviewSource::load` log them and fall back to empty data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid JSON array of records.
    #[error("Malformed data file: {0}")]
    Parse(#[from] serde_json::Error),
}
