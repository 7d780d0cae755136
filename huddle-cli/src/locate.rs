//! `locate` command: resolve one home address.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use huddle_core::HomeLocation;
use huddle_geo::{DEFAULT_CITIES_PATH, HomeLocationResolver};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::write_json;
use crate::{ARG_CITIES, CliError};

/// CLI arguments for the `locate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "locate",
    long_about = "Parse a free-text home such as \"Hanover, NH\" and locate \
                 it through the cities CSV, falling back to the state \
                 centroid. A missing CSV only disables exact matches.",
    about = "Parse and geocode a single home address"
)]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct LocateArgs {
    /// Home address to resolve.
    #[arg(value_name = "home")]
    #[serde(default)]
    pub(crate) home: Option<String>,
    /// Path to the cities CSV (defaults to `data/uscities.csv`).
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
}

impl LocateArgs {
    pub(crate) fn into_config(self) -> Result<LocateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(LocateConfig::from(merged))
    }
}

/// Resolved `locate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocateConfig {
    pub(crate) home: Option<String>,
    pub(crate) cities: Utf8PathBuf,
}

impl From<LocateArgs> for LocateConfig {
    fn from(args: LocateArgs) -> Self {
        Self {
            home: args.home,
            cities: args
                .cities
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CITIES_PATH)),
        }
    }
}

pub(crate) fn run_locate_with(args: LocateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_json(writer, &execute_locate(&config))
}

pub(crate) fn execute_locate(config: &LocateConfig) -> HomeLocation {
    HomeLocationResolver::lazy(config.cities.clone()).resolve(config.home.as_deref())
}
