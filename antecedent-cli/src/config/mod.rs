//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use antecedent_core::{ChunkerConfig, ResolverConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Resolver configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject settings the core would refuse anyway, with a config-level message
    pub fn validate(&self) -> Result<(), CliError> {
        if self.chunking.token_budget == 0 {
            return Err(CliError::ConfigError(
                "chunking.token_budget must be at least 1".to_string(),
            ));
        }
        if self.chunking.delimiter.as_deref() == Some("") {
            return Err(CliError::ConfigError(
                "chunking.delimiter must not be empty".to_string(),
            ));
        }
        if self.resolver.cluster_prefix.is_empty() {
            return Err(CliError::ConfigError(
                "resolver.cluster_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use antecedent_core::OverlapPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.chunking.token_budget, 512);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[resolver]
overlap = "first-wins"

[chunking]
token_budget = 64
delimiter = "."
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.resolver.overlap, OverlapPolicy::FirstWins);
        assert_eq!(config.resolver.cluster_prefix, "coref_cluster");
        assert_eq!(config.chunking.token_budget, 64);
        assert_eq!(config.chunking.delimiter.as_deref(), Some("."));
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[chunking]\ntoken_budget = 0\n").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("token_budget"));
    }

    #[test]
    fn test_unknown_overlap_policy_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[resolver]\noverlap = \"sometimes\"\n").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
