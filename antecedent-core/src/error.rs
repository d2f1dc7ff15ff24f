//! Layered error types
//!
//! Each component reports its own error enum; [`Error`] aggregates them for
//! callers that drive the whole pipeline.

use thiserror::Error;

/// Structural problems in a [`Document`](crate::Document)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Tokens are not ordered by offset or overlap each other
    #[error("token {index} at offset {start} overlaps or precedes the previous token ending at {previous_end}")]
    UnorderedTokens {
        /// Index of the offending token
        index: usize,
        /// Its start offset
        start: usize,
        /// End offset of the token before it
        previous_end: usize,
    },

    /// A span references tokens outside the document
    #[error("span {start}..{end} in group '{group}' is out of bounds for {token_count} tokens")]
    SpanOutOfBounds {
        /// Group the span belongs to
        group: String,
        /// First token index
        start: usize,
        /// One past the last token index
        end: usize,
        /// Number of tokens in the document
        token_count: usize,
    },

    /// A span contains no tokens
    #[error("empty span at token {start} in group '{group}'")]
    EmptySpan {
        /// Group the span belongs to
        group: String,
        /// Token index of the empty span
        start: usize,
    },

    /// A byte range does not line up with token boundaries
    #[error("byte range {start}..{end} does not align with token boundaries")]
    UnalignedRange {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

/// Failures while rewriting mentions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Two mentions try to rewrite the same token under [`OverlapPolicy::Reject`](crate::OverlapPolicy::Reject)
    #[error("token {token} is claimed by both '{first}' and '{second}'")]
    OverlappingMentions {
        /// Token index claimed twice
        token: usize,
        /// Cluster that wrote the token first
        first: String,
        /// Cluster that tried to write it again
        second: String,
    },
}

/// Chunking failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Budget must allow at least one unit per chunk
    #[error("invalid argument: token budget must be at least 1, got {0}")]
    InvalidBudget(usize),

    /// An empty delimiter cannot split anything
    #[error("invalid argument: delimiter must not be empty")]
    EmptyDelimiter,

    /// The limit unit was not where the unit lengths say it must be
    #[error("internal inconsistency: unit '{unit}' not found at or after offset {expected}")]
    Inconsistent {
        /// The limit unit text
        unit: String,
        /// Earliest offset the unit may start at
        expected: usize,
    },
}

/// Errors raised by an external [`Pipeline`](crate::Pipeline)
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The pipeline has no annotation for this text
    #[error("no annotation available for text starting with '{preview}'")]
    MissingAnnotation {
        /// First characters of the text
        preview: String,
    },

    /// The pipeline produced a structurally invalid document
    #[error("pipeline produced an invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),

    /// Any other pipeline failure
    #[error("pipeline '{name}' failed: {reason}")]
    Failed {
        /// Pipeline name
        name: String,
        /// Failure description
        reason: String,
    },
}

/// Top-level error for processing calls
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Resolver error
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Chunker error
    #[error("chunking error: {0}")]
    Chunk(#[from] ChunkError),

    /// Pipeline error
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

/// Result type for antecedent operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_error_display() {
        assert_eq!(
            ChunkError::InvalidBudget(0).to_string(),
            "invalid argument: token budget must be at least 1, got 0"
        );
        assert!(ChunkError::Inconsistent {
            unit: "C".to_string(),
            expected: 5,
        }
        .to_string()
        .contains("not found at or after offset 5"));
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = ChunkError::EmptyDelimiter.into();
        assert!(matches!(err, Error::Chunk(ChunkError::EmptyDelimiter)));

        let err: PipelineError = DocumentError::EmptySpan {
            group: "coref_clusters_1".to_string(),
            start: 3,
        }
        .into();
        assert!(err.to_string().contains("coref_clusters_1"));
    }
}
