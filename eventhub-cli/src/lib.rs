//! Command-line interface for producing EventHub recommendation feeds.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_SNAPSHOT: &str = "snapshot";
const ARG_USER: &str = "user";
const ARG_NOW: &str = "now";
const ARG_LIMIT: &str = "limit";
const ARG_OUTPUT: &str = "output";
const ENV_SNAPSHOT: &str = "EVENTHUB_CMDS_RECOMMEND_SNAPSHOT";
const ENV_USER: &str = "EVENTHUB_CMDS_RECOMMEND_USER";

/// Run the EventHub CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// snapshot loading or the recommendation pass fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "eventhub",
    about = "Rank upcoming events for an EventHub user",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the events in a snapshot for one user.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
