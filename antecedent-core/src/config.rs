//! Configuration types for resolution and chunking

use crate::document::COREF_CLUSTER_PREFIX;
use crate::error::ChunkError;

/// What to do when two mentions rewrite the same token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OverlapPolicy {
    /// The mention processed last keeps the token
    #[default]
    LastWins,
    /// The mention processed first keeps the token
    FirstWins,
    /// Fail the resolution
    Reject,
}

impl OverlapPolicy {
    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapPolicy::LastWins => "last-wins",
            OverlapPolicy::FirstWins => "first-wins",
            OverlapPolicy::Reject => "reject",
        }
    }
}

/// Resolver settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Span groups whose name starts with this are coreference clusters
    pub cluster_prefix: String,
    /// Overlapping mention handling
    pub overlap: OverlapPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cluster_prefix: COREF_CLUSTER_PREFIX.to_string(),
            overlap: OverlapPolicy::default(),
        }
    }
}

/// Chunking settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    /// Maximum units per chunk
    pub token_budget: usize,
    /// Unit delimiter; whitespace-separated words when absent
    pub delimiter: Option<String>,
}

impl ChunkerConfig {
    /// Whitespace chunking with the given budget
    pub fn new(token_budget: usize) -> Self {
        Self {
            token_budget,
            delimiter: None,
        }
    }

    /// Split units on `delimiter` instead of whitespace
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::new(512)
    }
}

/// How chunks are dispatched to the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One chunk after another on the calling thread
    #[default]
    Sequential,
    /// Chunks dispatched on a rayon pool, assembled in chunk order
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Processor configuration
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    /// Resolver settings
    pub resolver: ResolverConfig,
    /// Chunking settings
    pub chunking: ChunkerConfig,
    /// Chunk dispatch mode
    pub execution_mode: ExecutionMode,
    /// Thread count override for parallel mode (None = one per core)
    pub threads: Option<usize>,
}

impl ProcessorConfig {
    /// Create a builder
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }
}

/// Builder for [`ProcessorConfig`]
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Set the cluster name prefix
    pub fn cluster_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.resolver.cluster_prefix = prefix.into();
        self
    }

    /// Set the overlap policy
    pub fn overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.config.resolver.overlap = overlap;
        self
    }

    /// Set the chunk unit budget
    pub fn token_budget(mut self, token_budget: usize) -> Self {
        self.config.chunking.token_budget = token_budget;
        self
    }

    /// Set the chunk unit delimiter
    pub fn delimiter(mut self, delimiter: Option<String>) -> Self {
        self.config.chunking.delimiter = delimiter;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ProcessorConfig, ChunkError> {
        if self.config.chunking.token_budget == 0 {
            return Err(ChunkError::InvalidBudget(0));
        }
        if self.config.chunking.delimiter.as_deref() == Some("") {
            return Err(ChunkError::EmptyDelimiter);
        }
        Ok(self.config)
    }
}
