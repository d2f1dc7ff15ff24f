//! CLI command implementations

use anyhow::Result;
use antecedent_core::OverlapPolicy;
use clap::Subcommand;

pub mod chunk;
pub mod generate_config;
pub mod inspect;
pub mod resolve;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite coreference mentions in annotated JSON documents
    Resolve(resolve::ResolveArgs),

    /// Split text files into chunks of a bounded number of units
    Chunk(chunk::ChunkArgs),

    /// Show the span groups and clusters of an annotated document
    Inspect(inspect::InspectArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Resolve(args) => args.execute(),
            Commands::Chunk(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Overlapping mention handling, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OverlapArg {
    /// The cluster processed last keeps the token
    LastWins,
    /// The cluster processed first keeps the token
    FirstWins,
    /// Fail on overlapping clusters
    Reject,
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::LastWins => OverlapPolicy::LastWins,
            OverlapArg::FirstWins => OverlapPolicy::FirstWins,
            OverlapArg::Reject => OverlapPolicy::Reject,
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
