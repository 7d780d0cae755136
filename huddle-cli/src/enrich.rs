//! `enrich` command: resolve every member's home and write the roster back.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use huddle_data::{EnrichSummary, enrich_members, load_roster, write_roster};
use huddle_geo::{CityTable, HomeLocationResolver};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{require_existing, write_json};
use crate::{ARG_CITIES, ARG_OUTPUT, ARG_ROSTER, CliError, ENV_ENRICH_CITIES, ENV_ENRICH_ROSTER};

/// CLI arguments for the `enrich` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "enrich",
    long_about = "Load a roster (stored or seed shape), resolve every \
                 member's home against the cities CSV and write the \
                 roster with `homeLocation` filled in. Prints the match \
                 summary.",
    about = "Resolve every member's home and write an enriched roster"
)]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct EnrichArgs {
    /// Path to the roster JSON file.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Path to the cities CSV.
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Where to write the enriched roster (defaults to
    /// `<roster>.enriched.json` beside the input).
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl EnrichArgs {
    pub(crate) fn into_config(self) -> Result<EnrichConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EnrichConfig::try_from(merged)
    }
}

/// Resolved `enrich` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnrichConfig {
    pub(crate) roster: Utf8PathBuf,
    pub(crate) cities: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl EnrichConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.roster, ARG_ROSTER)?;
        require_existing(&self.cities, ARG_CITIES)?;
        Ok(())
    }
}

impl TryFrom<EnrichArgs> for EnrichConfig {
    type Error = CliError;

    fn try_from(args: EnrichArgs) -> Result<Self, Self::Error> {
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_ENRICH_ROSTER,
        })?;
        let cities = args.cities.ok_or(CliError::MissingArgument {
            field: ARG_CITIES,
            env: ENV_ENRICH_CITIES,
        })?;
        let output = args.output.unwrap_or_else(|| default_output(&roster));
        Ok(Self {
            roster,
            cities,
            output,
        })
    }
}

/// `team.json` becomes `team.enriched.json` in the same directory.
pub(crate) fn default_output(roster: &Utf8Path) -> Utf8PathBuf {
    let stem = roster.file_stem().unwrap_or("roster");
    roster.with_file_name(format!("{stem}.enriched.json"))
}

pub(crate) fn run_enrich_with(args: EnrichArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let summary = execute_enrich(&config)?;
    write_json(writer, &summary)
}

pub(crate) fn execute_enrich(config: &EnrichConfig) -> Result<EnrichSummary, CliError> {
    config.validate_sources()?;
    let resolver = HomeLocationResolver::new(CityTable::load(&config.cities)?);
    let mut members = load_roster(&config.roster)?;
    let summary = enrich_members(&resolver, &mut members);
    write_roster(&config.output, &members)?;
    info!("wrote {} members to {}", members.len(), config.output);
    Ok(summary)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EnrichConfig, CliError> {
    let merged = EnrichArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EnrichConfig::try_from(merged)
}
