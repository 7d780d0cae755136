//! Input checks and output helpers shared by the subcommands.

use std::io::Write;

use camino::Utf8Path;
use huddle_core::{MemberProfile, MemberQuery, Role};
use huddle_data::{enrich_members, load_roster};
use huddle_geo::{CityTable, HomeLocationResolver};
use log::debug;
use serde::Serialize;

use crate::{ARG_CITIES, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match huddle_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the roster, resolving homes against `cities` when one is given.
///
/// Without a city table the stored `homeLocation` values are used as-is.
pub(crate) fn load_members(
    roster: &Utf8Path,
    cities: Option<&Utf8Path>,
) -> Result<Vec<MemberProfile>, CliError> {
    let mut members = load_roster(roster)?;
    if let Some(path) = cities {
        require_existing(path, ARG_CITIES)?;
        let resolver = HomeLocationResolver::new(CityTable::load(path)?);
        let summary = enrich_members(&resolver, &mut members);
        debug!("resolved {} homes from {path}", summary.total);
    }
    Ok(members)
}

/// Build a directory filter from optional role and year arguments.
pub(crate) fn member_query(
    role: Option<&str>,
    year: Option<&str>,
) -> Result<MemberQuery, CliError> {
    let mut query = MemberQuery::new();
    if let Some(key) = role {
        query = query.with_role(key.trim().parse::<Role>()?);
    }
    if let Some(value) = year.map(str::trim).filter(|value| !value.is_empty()) {
        query = query.with_year(value);
    }
    Ok(query)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
