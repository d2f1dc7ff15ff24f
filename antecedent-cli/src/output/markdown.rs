//! Markdown output formatter

use super::{OutputFormatter, Segment};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, segment: &Segment<'_>) -> Result<()> {
        self.segment_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` @{}: {}",
            self.segment_count,
            segment.source,
            segment.offset,
            segment.text.trim()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
