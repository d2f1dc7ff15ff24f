//! Whole-document and chunked resolution driven by a [`Pipeline`]

use crate::chunker::{Chunker, TextChunk};
use crate::config::{ExecutionMode, ProcessorConfig};
use crate::document::Document;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::resolver::{Resolution, Resolver};
use std::time::Instant;

/// Resolved text with processing metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Resolved text
    pub text: String,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, Default)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Number of pipeline calls made
    pub chunks_processed: usize,
    /// Clusters that rewrote at least one mention, summed over chunks
    pub clusters_applied: usize,
    /// Mentions replaced by an antecedent
    pub mentions_rewritten: usize,
    /// Tokens dropped inside rewritten mentions
    pub tokens_elided: usize,
    /// Input size in bytes
    pub bytes_processed: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Resolver bound to an explicitly owned pipeline
///
/// ```
/// use antecedent_core::{CorefProcessor, ProcessorConfig, WhitespacePipeline};
///
/// let config = ProcessorConfig::builder().token_budget(3).build().unwrap();
/// let processor = CorefProcessor::new(WhitespacePipeline, config).unwrap();
///
/// let output = processor.resolve_chunked("one two three four five").unwrap();
/// assert_eq!(output.text, "one two three four five");
/// assert_eq!(output.metadata.chunks_processed, 2);
/// ```
#[derive(Debug)]
pub struct CorefProcessor<P> {
    pipeline: P,
    resolver: Resolver,
    chunker: Chunker,
    config: ProcessorConfig,
}

impl<P: Pipeline> CorefProcessor<P> {
    /// Create a processor, validating the chunking settings
    pub fn new(pipeline: P, config: ProcessorConfig) -> Result<Self> {
        let chunker = Chunker::new(config.chunking.clone())?;
        let resolver = Resolver::new(config.resolver.clone());
        Ok(Self {
            pipeline,
            resolver,
            chunker,
            config,
        })
    }

    /// The owned pipeline
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// The active configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Resolve an already annotated document
    pub fn resolve_document(&self, doc: &Document) -> Result<Resolution> {
        Ok(self.resolver.resolve(doc)?)
    }

    /// Annotate `text` in one pipeline call and resolve it
    pub fn resolve_text(&self, text: &str) -> Result<Output> {
        let started = Instant::now();
        let doc = self.pipeline.annotate(text)?;
        let resolution = self.resolver.resolve(&doc)?;
        Ok(assemble(
            vec![resolution],
            ExecutionMode::Sequential,
            text.len(),
            started,
        ))
    }

    /// Split `text` into chunks and resolve each one independently
    ///
    /// Boundaries are computed up front, one after another. Each chunk then
    /// gets its own pipeline call, and the resolved chunks are joined in
    /// chunk order.
    pub fn resolve_chunked(&self, text: &str) -> Result<Output> {
        let started = Instant::now();
        let chunks = self.chunker.split(text)?;
        log::debug!(
            "split {} bytes into {} chunks of at most {} units",
            text.len(),
            chunks.len(),
            self.config.chunking.token_budget
        );

        let resolutions = match self.config.execution_mode {
            ExecutionMode::Sequential => chunks
                .iter()
                .map(|chunk| self.process_chunk(chunk))
                .collect::<Result<Vec<_>>>()?,
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.process_parallel(&chunks)?,
        };

        Ok(assemble(
            resolutions,
            self.config.execution_mode,
            text.len(),
            started,
        ))
    }

    fn process_chunk(&self, chunk: &TextChunk<'_>) -> Result<Resolution> {
        let doc = self.pipeline.annotate(chunk.text)?;
        let resolution = self.resolver.resolve(&doc)?;
        log::debug!(
            "chunk {} ({}..{}): {} mentions rewritten",
            chunk.index,
            chunk.start,
            chunk.end,
            resolution.mentions_rewritten
        );
        Ok(resolution)
    }

    #[cfg(feature = "parallel")]
    fn process_parallel(&self, chunks: &[TextChunk<'_>]) -> Result<Vec<Resolution>> {
        use crate::error::Error;
        use rayon::prelude::*;

        let threads = self.config.threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| self.process_chunk(chunk))
                .collect::<Result<Vec<_>>>()
        })
    }
}

fn assemble(
    resolutions: Vec<Resolution>,
    execution_mode: ExecutionMode,
    bytes_processed: usize,
    started: Instant,
) -> Output {
    let mut text = String::with_capacity(bytes_processed);
    let mut metadata = ProcessingMetadata {
        execution_mode,
        chunks_processed: resolutions.len(),
        bytes_processed,
        ..Default::default()
    };

    for resolution in resolutions {
        text.push_str(&resolution.text);
        metadata.clusters_applied += resolution.clusters_applied;
        metadata.mentions_rewritten += resolution.mentions_rewritten;
        metadata.tokens_elided += resolution.tokens_elided;
    }

    metadata.processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    Output { text, metadata }
}
