//! Command-line interface for the Huddle member directory.
//!
//! Every subcommand reads its inputs through layered configuration (CLI
//! flags, config files and `HUDDLE_CMDS_*` environment variables) and prints
//! pretty JSON to stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod directory;
mod enrich;
mod error;
mod inputs;
mod locate;
mod similar;

pub use error::CliError;

use directory::{HometownsArgs, StatesArgs, StatsArgs};
use enrich::EnrichArgs;
use locate::LocateArgs;
use similar::SimilarArgs;

const ARG_MEMBER_ID: &str = "member-id";
const ARG_ROSTER: &str = "roster";
const ARG_CITIES: &str = "cities";
const ARG_OUTPUT: &str = "output";
const ARG_LIMIT: &str = "limit";
const ARG_ROLE: &str = "role";
const ARG_YEAR: &str = "year";
const ARG_INCLUDE_UNLOCATED: &str = "include-unlocated";

const ENV_SIMILAR_MEMBER_ID: &str = "HUDDLE_CMDS_SIMILAR_MEMBER_ID";
const ENV_SIMILAR_ROSTER: &str = "HUDDLE_CMDS_SIMILAR_ROSTER";
const ENV_ENRICH_ROSTER: &str = "HUDDLE_CMDS_ENRICH_ROSTER";
const ENV_ENRICH_CITIES: &str = "HUDDLE_CMDS_ENRICH_CITIES";
const ENV_HOMETOWNS_ROSTER: &str = "HUDDLE_CMDS_HOMETOWNS_ROSTER";
const ENV_STATES_ROSTER: &str = "HUDDLE_CMDS_STATES_ROSTER";
const ENV_STATS_ROSTER: &str = "HUDDLE_CMDS_STATS_ROSTER";

/// Run the Huddle CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Similar(args) => similar::run_similar_with(args, writer),
        Command::Locate(args) => locate::run_locate_with(args, writer),
        Command::Enrich(args) => enrich::run_enrich_with(args, writer),
        Command::Hometowns(args) => directory::run_hometowns_with(args, writer),
        Command::States(args) => directory::run_states_with(args, writer),
        Command::Stats(args) => directory::run_stats_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "huddle",
    about = "Member matching and hometown tooling for the Huddle directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the members most similar to one member.
    Similar(SimilarArgs),
    /// Parse and geocode a single home address.
    Locate(LocateArgs),
    /// Resolve every member's home and write an enriched roster.
    Enrich(EnrichArgs),
    /// List hometown map points.
    Hometowns(HometownsArgs),
    /// Count members per home state.
    States(StatesArgs),
    /// Summarise roles, majors and class years.
    Stats(StatsArgs),
}

#[cfg(test)]
mod tests;
