//! Error types raised while reading and writing rosters.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while importing or exporting a member roster.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster at {path}")]
    ReadFile {
        /// Roster path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// The roster was not valid JSON.
    #[error("failed to parse roster at {path}")]
    Parse {
        /// Roster path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The roster's top-level value was not an array.
    #[error("roster at {path} must be a JSON array of members")]
    NotAnArray {
        /// Roster path.
        path: Utf8PathBuf,
    },
    /// Writing the roster failed.
    #[error("failed to write roster to {path}")]
    WriteFile {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the roster failed.
    #[error("failed to serialise roster for {path}")]
    Serialise {
        /// Output path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
