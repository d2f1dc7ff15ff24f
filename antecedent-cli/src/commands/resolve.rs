//! Resolve command implementation

use super::{init_logging, OverlapArg};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_writer, OutputFormat, Segment};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use antecedent_core::Resolver;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Annotated JSON documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Span group name prefix that marks coreference clusters
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// How to handle tokens claimed by more than one cluster
    #[arg(long, value_enum)]
    pub overlap: Option<OverlapArg>,

    /// Fail on structurally invalid documents instead of skipping bad spans
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let resolver = Resolver::new(config.resolver);
        let files = resolve_patterns(&self.input)?;
        log::info!("Resolving {} document(s)", files.len());

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer, config.output.pretty_json);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(files.len() as u64, "documents");

        for path in &files {
            let doc = FileReader::read_document(path)?;
            if self.strict {
                doc.validate()
                    .map_err(|e| CliError::InvalidDocument(format!("{}: {e}", path.display())))?;
            }

            let resolution = resolver
                .resolve(&doc)
                .with_context(|| format!("Failed to resolve {}", path.display()))?;
            log::info!(
                "{}: {} clusters applied, {} mentions rewritten",
                path.display(),
                resolution.clusters_applied,
                resolution.mentions_rewritten
            );

            let source = path.display().to_string();
            formatter.format_segment(&Segment {
                source: &source,
                index: 0,
                offset: 0,
                text: &resolution.text,
            })?;
            progress.input_done(&source, 1);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Configuration file values with command-line overrides applied
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(prefix) = &self.prefix {
            config.resolver.cluster_prefix = prefix.clone();
        }
        if let Some(overlap) = self.overlap {
            config.resolver.overlap = overlap.into();
        }
        config.validate()?;
        Ok(config)
    }
}
