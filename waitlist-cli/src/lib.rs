//! Command-line interface for ranking a waitlist roster.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;
use rank::RankArgs;
#[cfg(test)]
use rank::{RankConfig, run_rank_with};

const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_DEBUG: &str = "debug";
const ARG_DATASET: &str = "dataset";
const ARG_TOP: &str = "top";
const ARG_RANDOM: &str = "random";
const ARG_UNIT: &str = "unit";
const ARG_SEED: &str = "seed";
const ARG_WEIGHT_AGE: &str = "weight-age";
const ARG_WEIGHT_DISTANCE: &str = "weight-distance";
const ARG_WEIGHT_ACCEPTED: &str = "weight-accepted";
const ARG_WEIGHT_CANCELED: &str = "weight-canceled";
const ARG_WEIGHT_REPLY: &str = "weight-reply";
const ENV_LATITUDE: &str = "WAITLIST_CMDS_RANK_LATITUDE";
const ENV_LONGITUDE: &str = "WAITLIST_CMDS_RANK_LONGITUDE";

/// Run the waitlist CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waitlist",
    about = "Rank waitlisted candidates by proximity and engagement",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the roster around a reference point and print JSON.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
