//! antecedent: coreference rewriting and document chunking

use antecedent_cli::commands::Commands;
use clap::Parser;

/// Rewrite coreference mentions and split long documents into chunks
#[derive(Debug, Parser)]
#[command(name = "antecedent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chunk_command() {
        let cli = Cli::try_parse_from(["antecedent", "chunk", "-i", "doc.txt", "-b", "4"]).unwrap();
        assert!(matches!(cli.command, Commands::Chunk(_)));
    }
}
