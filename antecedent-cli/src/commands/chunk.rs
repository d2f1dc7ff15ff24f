//! Chunk command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_writer, OutputFormat, Segment};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use antecedent_core::Chunker;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input text files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format. Text ends every chunk with a newline if it lacks one,
    /// so the output is not a byte copy of the input; json keeps exact chunk
    /// bytes and offsets
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum units per chunk
    #[arg(short, long, value_name = "UNITS")]
    pub budget: Option<usize>,

    /// Split units on this string instead of whitespace
    #[arg(short, long, value_name = "DELIMITER")]
    pub delimiter: Option<String>,

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

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let chunker = Chunker::new(config.chunking.clone())?;
        let files = resolve_patterns(&self.input)?;

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(self.format, writer, config.output.pretty_json);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(files.len() as u64, "files");

        for path in &files {
            let text = FileReader::read_text(path)?;
            let chunks = chunker
                .split(&text)
                .with_context(|| format!("Failed to chunk {}", path.display()))?;
            log::info!("{}: {} chunks", path.display(), chunks.len());

            let source = path.display().to_string();
            for chunk in &chunks {
                formatter.format_segment(&Segment {
                    source: &source,
                    index: chunk.index,
                    offset: chunk.start,
                    text: chunk.text,
                })?;
            }
            progress.input_done(&source, chunks.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!("{} chunks from {} file(s)", progress.segments(), files.len());
        Ok(())
    }

    /// Configuration file values with command-line overrides applied
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(budget) = self.budget {
            config.chunking.token_budget = budget;
        }
        if let Some(delimiter) = &self.delimiter {
            config.chunking.delimiter = Some(delimiter.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::json::SegmentData;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str, output: PathBuf) -> ChunkArgs {
        ChunkArgs {
            input: vec![input.to_string()],
            output: Some(output),
            format: OutputFormat::Json,
            budget: Some(2),
            delimiter: Some(".".to_string()),
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_json_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("abcd.txt");
        let output = temp_dir.path().join("chunks.json");
        fs::write(&input, "A. B. C. D.").unwrap();

        args(&input.display().to_string(), output.clone())
            .execute()
            .unwrap();

        let segments: Vec<SegmentData> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["A. B.", " C. D."]);
        assert_eq!(segments[1].offset, 5);
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut chunk_args = args("x.txt", temp_dir.path().join("out.json"));
        chunk_args.budget = Some(0);
        let err = chunk_args.effective_config().unwrap_err();
        assert!(err.to_string().contains("token_budget"));
    }
}
