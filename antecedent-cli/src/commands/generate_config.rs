//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the cluster prefix and chunk budget to match your pipeline");
        println!("2. Use it for resolution:");
        println!(
            "   antecedent resolve -i doc.json --config {}",
            self.output.display()
        );
        println!("3. Or for chunking:");
        println!(
            "   antecedent chunk -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# antecedent configuration

[resolver]
# Span groups whose name starts with this prefix are coreference clusters.
# Other groups (entities, noun chunks) are ignored.
cluster_prefix = "coref_cluster"

# Tokens claimed by mentions of two different clusters:
#   "last-wins"  - the cluster listed later in the document keeps the token
#   "first-wins" - the cluster listed earlier keeps the token
#   "reject"     - fail the document
overlap = "last-wins"

[chunking]
# Maximum number of units per chunk
token_budget = 512

# Units are whitespace-separated words unless a delimiter is set.
# delimiter = "."

[output]
# Pretty print JSON output
pretty_json = true
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("antecedent.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let loaded = CliConfig::from_file(&output_path).unwrap();
        assert_eq!(loaded.chunking.token_budget, 512);
    }
}
