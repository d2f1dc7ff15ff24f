//! Unit-aligned text chunking
//!
//! Long documents are cut into consecutive chunks that each hold a bounded
//! number of units, so every chunk can go through the pipeline on its own.
//! A unit is a whitespace-separated word, or, when a delimiter is configured,
//! one piece of the text split on that delimiter. Chunk boundaries always fall
//! on the start of a unit, so no unit is ever split and concatenating the
//! chunks gives back the input.

use crate::config::ChunkerConfig;
use crate::error::ChunkError;
use std::ops::Range;

/// A chunk of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// Position in the chunk sequence
    pub index: usize,
    /// Byte offset in the original text
    pub start: usize,
    /// Byte offset one past the chunk end
    pub end: usize,
    /// The chunk content
    pub text: &'a str,
}

impl TextChunk<'_> {
    /// Byte range of this chunk in the original text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Byte length
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the chunk is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whitespace-separated words with their byte offsets
pub(crate) fn whitespace_units(text: &str) -> WhitespaceUnits<'_> {
    WhitespaceUnits { text, pos: 0 }
}

pub(crate) struct WhitespaceUnits<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for WhitespaceUnits<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + self.text[self.pos..].find(|c: char| !c.is_whitespace())?;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, &self.text[start..self.pos]))
    }
}

/// Pieces between delimiter matches, empty pieces included
struct DelimitedUnits<'a> {
    text: &'a str,
    delimiter: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Iterator for DelimitedUnits<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let start = self.pos;
        match self.text[start..].find(self.delimiter) {
            Some(rel) => {
                self.pos = start + rel + self.delimiter.len();
                Some((start, &self.text[start..start + rel]))
            }
            None => {
                self.finished = true;
                Some((start, &self.text[start..]))
            }
        }
    }
}

fn units<'a>(
    text: &'a str,
    delimiter: Option<&'a str>,
) -> Box<dyn Iterator<Item = (usize, &'a str)> + 'a> {
    match delimiter {
        Some(delimiter) => Box::new(DelimitedUnits {
            text,
            delimiter,
            pos: 0,
            finished: false,
        }),
        None => Box::new(whitespace_units(text)),
    }
}

fn check_arguments(token_budget: usize, delimiter: Option<&str>) -> Result<(), ChunkError> {
    if token_budget == 0 {
        return Err(ChunkError::InvalidBudget(token_budget));
    }
    if delimiter.is_some_and(str::is_empty) {
        return Err(ChunkError::EmptyDelimiter);
    }
    Ok(())
}

/// Byte offset where the first chunk of `remaining` ends
///
/// If `remaining` holds at most `token_budget` units the whole slice is one
/// chunk. Otherwise the chunk ends where unit number `token_budget` (0-based)
/// starts, so it carries exactly `token_budget` units and their separators.
pub fn next_chunk_end(
    remaining: &str,
    token_budget: usize,
    delimiter: Option<&str>,
) -> Result<usize, ChunkError> {
    check_arguments(token_budget, delimiter)?;

    let separator_len = delimiter.map_or(1, str::len);
    let mut units = units(remaining, delimiter);
    let mut expected = 0;

    for _ in 0..token_budget {
        match units.next() {
            Some((_, unit)) => expected += unit.len() + separator_len,
            None => return Ok(remaining.len()),
        }
    }

    let Some((offset, limit)) = units.next() else {
        return Ok(remaining.len());
    };

    // Separators are at least one byte, so the limit unit cannot start
    // before the packed length of the units ahead of it.
    if offset < expected || offset == 0 || !remaining[offset..].starts_with(limit) {
        return Err(ChunkError::Inconsistent {
            unit: limit.to_string(),
            expected,
        });
    }

    Ok(offset)
}

/// Split `text` into chunks of at most `token_budget` units
pub fn split_into_chunks<'a>(
    text: &'a str,
    token_budget: usize,
    delimiter: Option<&str>,
) -> Result<Vec<TextChunk<'a>>, ChunkError> {
    check_arguments(token_budget, delimiter)?;
    ChunkIter::new(text, token_budget, delimiter).collect()
}

/// Byte ranges of the chunks of `text`
pub fn chunk_boundaries(
    text: &str,
    token_budget: usize,
    delimiter: Option<&str>,
) -> Result<Vec<Range<usize>>, ChunkError> {
    Ok(split_into_chunks(text, token_budget, delimiter)?
        .iter()
        .map(TextChunk::range)
        .collect())
}

/// Lazy sequence of chunks
///
/// Each boundary is computed from the position left by the previous chunk.
/// After the first error the iterator is exhausted.
#[derive(Debug)]
pub struct ChunkIter<'a, 'd> {
    text: &'a str,
    token_budget: usize,
    delimiter: Option<&'d str>,
    pos: usize,
    index: usize,
    failed: bool,
}

impl<'a, 'd> ChunkIter<'a, 'd> {
    fn new(text: &'a str, token_budget: usize, delimiter: Option<&'d str>) -> Self {
        Self {
            text,
            token_budget,
            delimiter,
            pos: 0,
            index: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for ChunkIter<'a, '_> {
    type Item = Result<TextChunk<'a>, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        match next_chunk_end(&self.text[start..], self.token_budget, self.delimiter) {
            Ok(len) => {
                let end = start + len;
                let chunk = TextChunk {
                    index: self.index,
                    start,
                    end,
                    text: &self.text[start..end],
                };
                log::trace!("chunk {} spans bytes {}..{}", self.index, start, end);
                self.pos = end;
                self.index += 1;
                Some(Ok(chunk))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Chunker bound to a validated [`ChunkerConfig`]
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a chunker, rejecting a zero budget or an empty delimiter
    pub fn new(config: ChunkerConfig) -> Result<Self, ChunkError> {
        check_arguments(config.token_budget, config.delimiter.as_deref())?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Lazily iterate over the chunks of `text`
    pub fn chunks<'a>(&self, text: &'a str) -> ChunkIter<'a, '_> {
        ChunkIter::new(text, self.config.token_budget, self.config.delimiter.as_deref())
    }

    /// Collect all chunks of `text`
    pub fn split<'a>(&self, text: &'a str) -> Result<Vec<TextChunk<'a>>, ChunkError> {
        self.chunks(text).collect()
    }
}
