//! Directory read commands: `hometowns`, `states` and `stats`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use huddle_core::{
    ClassYearCount, HometownPoint, HometownQuery, MajorCount, RoleCounts, StateCount,
    class_year_counts, home_state_counts, hometown_points, major_counts, role_counts,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_members, member_query, require_existing, write_json};
use crate::{
    ARG_CITIES, ARG_INCLUDE_UNLOCATED, ARG_LIMIT, ARG_ROLE, ARG_ROSTER, ARG_YEAR, CliError,
    ENV_HOMETOWNS_ROSTER, ENV_STATES_ROSTER, ENV_STATS_ROSTER,
};

/// CLI arguments for the `hometowns` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "hometowns",
    long_about = "Project members onto hometown map points. Only members \
                 whose home has coordinates are listed unless \
                 --include-unlocated is set.",
    about = "List hometown map points"
)]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct HometownsArgs {
    /// Path to the roster JSON file.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Optional cities CSV used to resolve homes first.
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Only members holding this role (dev, des, pm, core, mentor).
    #[arg(long = ARG_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) role: Option<String>,
    /// Only members in this class year.
    #[arg(long = ARG_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<String>,
    /// Maximum number of points (default 500, at most 2000).
    #[arg(long = ARG_LIMIT, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) limit: Option<i64>,
    /// Also list members whose home has no coordinates.
    #[arg(long = ARG_INCLUDE_UNLOCATED, action = ArgAction::SetTrue)]
    #[serde(default)]
    pub(crate) include_unlocated: bool,
}

/// Resolved `hometowns` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HometownsConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) cities: Option<Utf8PathBuf>,
    pub(crate) query: HometownQuery,
}

impl TryFrom<HometownsArgs> for HometownsConfig {
    type Error = CliError;

    fn try_from(args: HometownsArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_HOMETOWNS_ROSTER,
        })?;
        let query = HometownQuery {
            filter: member_query(args.role.as_deref(), args.year.as_deref())?,
            require_coordinates: !args.include_unlocated,
            ..HometownQuery::default()
        }
        .with_limit(args.limit);
        Ok(Self {
            roster,
            cities: args.cities,
            query,
        })
    }
}

pub(crate) fn run_hometowns_with(
    args: HometownsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = HometownsConfig::try_from(merged)?;
    write_json(writer, &execute_hometowns(&config)?)
}

pub(crate) fn execute_hometowns(config: &HometownsConfig) -> Result<Vec<HometownPoint>, CliError> {
    require_existing(&config.roster, ARG_ROSTER)?;
    let members = load_members(&config.roster, config.cities.as_deref())?;
    Ok(hometown_points(&members, &config.query))
}

/// CLI arguments for the `states` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "states",
    about = "Count members per home state, most common first"
)]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct StatesArgs {
    /// Path to the roster JSON file.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Optional cities CSV used to resolve homes first.
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Only members holding this role (dev, des, pm, core, mentor).
    #[arg(long = ARG_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) role: Option<String>,
    /// Only members in this class year.
    #[arg(long = ARG_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<String>,
}

pub(crate) fn run_states_with(args: StatesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    write_json(writer, &execute_states(merged)?)
}

pub(crate) fn execute_states(args: StatesArgs) -> Result<Vec<StateCount>, CliError> {
    let roster = args.roster.ok_or(CliError::MissingArgument {
        field: ARG_ROSTER,
        env: ENV_STATES_ROSTER,
    })?;
    let query = member_query(args.role.as_deref(), args.year.as_deref())?;
    require_existing(&roster, ARG_ROSTER)?;
    let members = load_members(&roster, args.cities.as_deref())?;
    Ok(home_state_counts(&members, &query))
}

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "stats", about = "Summarise roles, majors and class years")]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct StatsArgs {
    /// Path to the roster JSON file.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
}

/// Directory-wide counts printed by `stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectoryStats {
    pub(crate) roles: RoleCounts,
    pub(crate) majors: Vec<MajorCount>,
    pub(crate) class_years: Vec<ClassYearCount>,
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    write_json(writer, &execute_stats(merged)?)
}

pub(crate) fn execute_stats(args: StatsArgs) -> Result<DirectoryStats, CliError> {
    let roster = args.roster.ok_or(CliError::MissingArgument {
        field: ARG_ROSTER,
        env: ENV_STATS_ROSTER,
    })?;
    require_existing(&roster, ARG_ROSTER)?;
    let members = load_members(&roster, None)?;
    Ok(DirectoryStats {
        roles: role_counts(&members),
        majors: major_counts(&members),
        class_years: class_year_counts(&members),
    })
}

#[cfg(test)]
pub(crate) fn hometowns_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<HometownsConfig, CliError> {
    let merged = HometownsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    HometownsConfig::try_from(merged)
}
