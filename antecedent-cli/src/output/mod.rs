//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One piece of output: a resolved document or a chunk of one
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// File the segment came from
    pub source: &'a str,
    /// Position among the segments of that file
    pub index: usize,
    /// Byte offset in the source text
    pub offset: usize,
    /// Segment content
    pub text: &'a str,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single segment
    fn format_segment(&mut self, segment: &Segment<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw text, each segment newline-terminated (a newline is appended when missing)
    Text,
    /// JSON array of segments with offsets
    Json,
    /// Markdown list of segments
    Markdown,
}

/// Destination writer: the given file, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
