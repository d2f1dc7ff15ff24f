//! Plain text output formatter

use super::{OutputFormatter, Segment};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - writes each segment verbatim, newline-terminated
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &Segment<'_>) -> Result<()> {
        self.writer.write_all(segment.text.as_bytes())?;
        if !segment.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_newline_terminated() {
        let mut formatter = TextFormatter::new(Vec::new());
        for (index, text) in ["Ann left. Ann won.", "second\n"].into_iter().enumerate() {
            formatter
                .format_segment(&Segment {
                    source: "doc.json",
                    index,
                    offset: 0,
                    text,
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(written, "Ann left. Ann won.\nsecond\n");
    }
}
