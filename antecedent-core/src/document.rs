//! Annotated document model
//!
//! A [`Document`] is what an external pipeline hands back for a piece of text:
//! the tokens, each with its trailing whitespace, and the named span groups
//! found over them. Coreference clusters are span groups whose name carries a
//! recognized prefix; other groups (entities, noun chunks) travel alongside.

use crate::chunker::whitespace_units;
use crate::error::DocumentError;

/// Prefix that marks a span group as a coreference cluster
pub const COREF_CLUSTER_PREFIX: &str = "coref_cluster";

/// Smallest unit of annotated text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Byte offset of the token in the document text
    pub start: usize,
    /// Literal token text
    pub text: String,
    /// Whitespace between this token and the next one
    #[cfg_attr(feature = "serde", serde(default))]
    pub whitespace: String,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, text: impl Into<String>, whitespace: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
            whitespace: whitespace.into(),
        }
    }

    /// Byte offset just past the token text
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Token text followed by its trailing whitespace
    pub fn text_with_whitespace(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.whitespace.len());
        out.push_str(&self.text);
        out.push_str(&self.whitespace);
        out
    }
}

/// A mention: tokens `start..end` of the owning document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Index of the first token
    pub start: usize,
    /// One past the index of the last token
    pub end: usize,
}

impl Span {
    /// Create a span over token indices `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tokens of this span, or `None` if it does not fit the document
    pub fn tokens<'d>(&self, doc: &'d Document) -> Option<&'d [Token]> {
        if self.is_empty() {
            return None;
        }
        doc.tokens.get(self.start..self.end)
    }

    /// Surface text: token texts joined by their internal whitespace
    pub fn text(&self, doc: &Document) -> Option<String> {
        let tokens = self.tokens(doc)?;
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            out.push_str(&token.text);
            if i + 1 < tokens.len() {
                out.push_str(&token.whitespace);
            }
        }
        Some(out)
    }
}

/// Named, ordered list of spans
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanGroup {
    /// Group identifier as assigned by the pipeline
    pub name: String,
    /// Spans in order of occurrence
    #[cfg_attr(feature = "serde", serde(default))]
    pub spans: Vec<Span>,
}

impl SpanGroup {
    /// Create a span group
    pub fn new(name: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            name: name.into(),
            spans,
        }
    }

    /// Whether the group name marks it as a coreference cluster
    pub fn is_cluster(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }

    /// The first span, if any
    pub fn antecedent(&self) -> Option<&Span> {
        self.spans.first()
    }
}

/// Tokens plus named span groups for one processed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Tokens in offset order
    pub tokens: Vec<Token>,
    /// Span groups in pipeline order
    #[cfg_attr(feature = "serde", serde(default))]
    pub span_groups: Vec<SpanGroup>,
}

impl Document {
    /// Create a document without span groups
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            span_groups: Vec::new(),
        }
    }

    /// Tokenize `text` on whitespace
    ///
    /// Leading whitespace becomes a token of its own so that [`Document::text`]
    /// reproduces the input exactly.
    pub fn from_whitespace_tokens(text: &str) -> Self {
        let words: Vec<(usize, &str)> = whitespace_units(text).collect();
        let mut tokens = Vec::with_capacity(words.len() + 1);

        match words.first() {
            Some(&(first, _)) if first > 0 => tokens.push(Token::new(0, &text[..first], "")),
            None if !text.is_empty() => tokens.push(Token::new(0, text, "")),
            _ => {}
        }

        for (i, &(start, word)) in words.iter().enumerate() {
            let ws_end = words.get(i + 1).map_or(text.len(), |&(next, _)| next);
            tokens.push(Token::new(start, word, &text[start + word.len()..ws_end]));
        }

        Self::new(tokens)
    }

    /// Append a span group
    pub fn with_group(mut self, name: impl Into<String>, spans: Vec<Span>) -> Self {
        self.span_groups.push(SpanGroup::new(name, spans));
        self
    }

    /// Look up a span group by name
    pub fn group(&self, name: &str) -> Option<&SpanGroup> {
        self.span_groups.iter().find(|g| g.name == name)
    }

    /// Span groups recognized as coreference clusters, in pipeline order
    pub fn clusters<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a SpanGroup> + 'a {
        self.span_groups.iter().filter(move |g| g.is_cluster(prefix))
    }

    /// Reconstruct the original text
    pub fn text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.text);
            out.push_str(&token.whitespace);
        }
        out
    }

    /// Build a span from a byte range that starts and ends on token edges
    pub fn span_for_range(&self, start: usize, end: usize) -> Result<Span, DocumentError> {
        let unaligned = DocumentError::UnalignedRange { start, end };
        let first = self
            .tokens
            .binary_search_by_key(&start, |t| t.start)
            .map_err(|_| unaligned.clone())?;
        let last = self.tokens[first..]
            .iter()
            .position(|t| t.end() == end)
            .ok_or(unaligned)?;
        Ok(Span::new(first, first + last + 1))
    }

    /// Check token ordering and span bounds
    pub fn validate(&self) -> Result<(), DocumentError> {
        for (index, pair) in self.tokens.windows(2).enumerate() {
            if pair[1].start < pair[0].end() {
                return Err(DocumentError::UnorderedTokens {
                    index: index + 1,
                    start: pair[1].start,
                    previous_end: pair[0].end(),
                });
            }
        }

        for group in &self.span_groups {
            for span in &group.spans {
                if span.is_empty() {
                    return Err(DocumentError::EmptySpan {
                        group: group.name.clone(),
                        start: span.start,
                    });
                }
                if span.end > self.tokens.len() {
                    return Err(DocumentError::SpanOutOfBounds {
                        group: group.name.clone(),
                        start: span.start,
                        end: span.end,
                        token_count: self.tokens.len(),
                    });
                }
            }
        }

        Ok(())
    }
}
