//! Errors raised while loading the city reference table.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a city CSV eagerly.
///
/// The lazily loaded table never surfaces these; it logs them and carries
/// on with an empty table.
#[derive(Debug, Error)]
pub enum CityTableError {
    /// The CSV file could not be opened.
    #[error("failed to open city table at {path}")]
    OpenFile {
        /// Requested CSV path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// The CSV stream was malformed.
    #[error("failed to read city table at {path}")]
    ReadCsv {
        /// CSV path being read.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// The header row lacks a required column.
    #[error("city table at {path} has no {column} column")]
    MissingColumn {
        /// CSV path being read.
        path: Utf8PathBuf,
        /// Logical column name (`city`, `state`, `lat` or `lng`).
        column: &'static str,
    },
}
