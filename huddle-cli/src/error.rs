//! Error types emitted by the Huddle CLI.
//!
//! Keep this error type reasonably small; every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use huddle_core::UnknownRole;
use huddle_data::RosterError;
use huddle_geo::CityTableError;
use thiserror::Error;

/// Errors emitted by the Huddle CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path is missing or is not a regular file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A role filter named an unknown role.
    #[error(transparent)]
    InvalidRole(#[from] UnknownRole),
    /// The requested member is not in the roster.
    #[error("member {id:?} not found in roster {path:?}")]
    UnknownMember { id: String, path: Utf8PathBuf },
    /// Reading or writing the roster failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Loading the city table failed.
    #[error(transparent)]
    CityTable(#[from] CityTableError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
