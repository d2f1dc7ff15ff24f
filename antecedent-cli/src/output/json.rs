//! JSON output formatter

use super::{OutputFormatter, Segment};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Source file
    pub source: String,
    /// Position among the segments of the source
    pub index: usize,
    /// Starting byte offset in the source text
    pub offset: usize,
    /// Byte length of the segment
    pub length: usize,
    /// The segment text, untrimmed
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            segments: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &Segment<'_>) -> Result<()> {
        self.segments.push(SegmentData {
            source: segment.source.to_string(),
            index: segment.index,
            offset: segment.offset,
            length: segment.text.len(),
            text: segment.text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_exact_text() {
        let mut formatter = JsonFormatter::new(Vec::new()).pretty(false);
        formatter
            .format_segment(&Segment {
                source: "a.txt",
                index: 1,
                offset: 5,
                text: " C. D.",
            })
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<SegmentData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, " C. D.");
        assert_eq!(parsed[0].offset, 5);
        assert_eq!(parsed[0].length, 6);
    }
}
