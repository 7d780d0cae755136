//! `similar` command: rank the members most like one member.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use huddle_core::MemberProfile;
use huddle_scorer::{AttributeScorer, SimilarityReport, similar_members};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_members, require_existing, write_json};
use crate::{
    ARG_CITIES, ARG_LIMIT, ARG_MEMBER_ID, ARG_ROSTER, CliError, ENV_SIMILAR_MEMBER_ID,
    ENV_SIMILAR_ROSTER,
};

/// CLI arguments for the `similar` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "similar",
    long_about = "Score every other member of the roster against one member \
                 on shared major, minor, class year, roles and home state, \
                 and print the best matches.",
    about = "Rank the members most similar to one member"
)]
#[ortho_config(prefix = "HUDDLE")]
pub(crate) struct SimilarArgs {
    /// Identifier of the member to match against.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) member_id: Option<String>,
    /// Path to the roster JSON file.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// Optional cities CSV used to resolve homes before scoring.
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Maximum number of matches (default 5, at most 20).
    #[arg(long = ARG_LIMIT, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) limit: Option<i64>,
}

impl SimilarArgs {
    pub(crate) fn into_config(self) -> Result<SimilarConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SimilarConfig::try_from(merged)
    }
}

/// Resolved `similar` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimilarConfig {
    pub(crate) member_id: String,
    pub(crate) roster: Utf8PathBuf,
    pub(crate) cities: Option<Utf8PathBuf>,
    pub(crate) limit: Option<i64>,
}

impl TryFrom<SimilarArgs> for SimilarConfig {
    type Error = CliError;

    fn try_from(args: SimilarArgs) -> Result<Self, Self::Error> {
        let member_id = args
            .member_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_MEMBER_ID,
                env: ENV_SIMILAR_MEMBER_ID,
            })?;
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_SIMILAR_ROSTER,
        })?;
        Ok(Self {
            member_id,
            roster,
            cities: args.cities,
            limit: args.limit,
        })
    }
}

pub(crate) fn run_similar_with(args: SimilarArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_similar(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_similar(config: &SimilarConfig) -> Result<SimilarityReport, CliError> {
    require_existing(&config.roster, ARG_ROSTER)?;
    let members = load_members(&config.roster, config.cities.as_deref())?;
    let (target, others) = split_target(members, &config.member_id).ok_or_else(|| {
        CliError::UnknownMember {
            id: config.member_id.clone(),
            path: config.roster.clone(),
        }
    })?;
    let similar = similar_members(&AttributeScorer::default(), &target, &others, config.limit);
    Ok(SimilarityReport::new(&target, similar))
}

/// Separate the member with `id` from everyone else, keeping roster order.
fn split_target(
    members: Vec<MemberProfile>,
    id: &str,
) -> Option<(MemberProfile, Vec<MemberProfile>)> {
    let (mut targets, others): (Vec<_>, Vec<_>) =
        members.into_iter().partition(|member| member.id == id);
    targets.pop().map(|target| (target, others))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SimilarConfig, CliError> {
    let merged = SimilarArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SimilarConfig::try_from(merged)
}
