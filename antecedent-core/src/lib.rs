//! Coreference rewriting and unit-aligned document chunking
//!
//! Given a tokenized document and the coreference clusters an external
//! pipeline found in it, [`resolve`] rewrites every later mention of a
//! cluster as the cluster's first mention. Long inputs can be cut with
//! [`split_into_chunks`] into pieces of a bounded number of units, each of
//! which goes through the pipeline on its own.
//!
//! # Example
//!
//! ```rust
//! use antecedent_core::{resolve, Document};
//!
//! let text = "The BRCA genes are known. Mutations within these genes matter.";
//! let doc = Document::from_whitespace_tokens(text);
//! let antecedent = doc.span_for_range(4, 14).unwrap();
//! let mention = doc.span_for_range(43, 54).unwrap();
//! let doc = doc.with_group("coref_clusters_1", vec![antecedent, mention]);
//!
//! assert_eq!(
//!     resolve(&doc),
//!     "The BRCA genes are known. Mutations within BRCA genes matter."
//! );
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod resolver;

// Re-export key types
pub use chunker::{
    chunk_boundaries, next_chunk_end, split_into_chunks, ChunkIter, Chunker, TextChunk,
};
pub use config::{
    ChunkerConfig, ExecutionMode, OverlapPolicy, ProcessorConfig, ProcessorConfigBuilder,
    ResolverConfig,
};
pub use document::{Document, Span, SpanGroup, Token, COREF_CLUSTER_PREFIX};
pub use error::{ChunkError, DocumentError, Error, PipelineError, ResolveError, Result};
pub use pipeline::{FnPipeline, Pipeline, PrecomputedPipeline, WhitespacePipeline};
pub use processor::{CorefProcessor, Output, ProcessingMetadata};
pub use resolver::{resolve, summarize_groups, GroupSummary, Resolution, Resolver};
