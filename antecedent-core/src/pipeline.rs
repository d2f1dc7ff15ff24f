//! External annotation pipeline
//!
//! The model that finds tokens and coreference clusters lives outside this
//! crate. Callers construct a [`Pipeline`] once and pass it by reference into
//! every processing call.

use crate::document::Document;
use crate::error::{DocumentError, PipelineError};
use std::collections::HashMap;

/// Turns raw text into an annotated [`Document`]
pub trait Pipeline: Send + Sync {
    /// Pipeline identifier
    fn name(&self) -> &str;

    /// Names of the processing components, in execution order
    fn components(&self) -> Vec<String> {
        Vec::new()
    }

    /// Tokenize and annotate `text`
    fn annotate(&self, text: &str) -> Result<Document, PipelineError>;
}

impl<P: Pipeline + ?Sized> Pipeline for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn components(&self) -> Vec<String> {
        (**self).components()
    }

    fn annotate(&self, text: &str) -> Result<Document, PipelineError> {
        (**self).annotate(text)
    }
}

/// Whitespace tokenizer that finds no clusters
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespacePipeline;

impl Pipeline for WhitespacePipeline {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn components(&self) -> Vec<String> {
        vec!["tokenizer".to_string()]
    }

    fn annotate(&self, text: &str) -> Result<Document, PipelineError> {
        Ok(Document::from_whitespace_tokens(text))
    }
}

/// Serves documents annotated ahead of time, looked up by their exact text
#[derive(Debug, Clone, Default)]
pub struct PrecomputedPipeline {
    documents: HashMap<String, Document>,
}

impl PrecomputedPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under its reconstructed text
    pub fn insert(&mut self, doc: Document) -> Result<(), DocumentError> {
        doc.validate()?;
        self.documents.insert(doc.text(), doc);
        Ok(())
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Pipeline for PrecomputedPipeline {
    fn name(&self) -> &str {
        "precomputed"
    }

    fn annotate(&self, text: &str) -> Result<Document, PipelineError> {
        self.documents
            .get(text)
            .cloned()
            .ok_or_else(|| PipelineError::MissingAnnotation {
                preview: text.chars().take(32).collect(),
            })
    }
}

/// Adapter turning a closure into a [`Pipeline`]
pub struct FnPipeline<F> {
    name: String,
    annotate: F,
}

impl<F> FnPipeline<F>
where
    F: Fn(&str) -> Result<Document, PipelineError> + Send + Sync,
{
    /// Wrap `annotate` under the given name
    pub fn new(name: impl Into<String>, annotate: F) -> Self {
        Self {
            name: name.into(),
            annotate,
        }
    }
}

impl<F> std::fmt::Debug for FnPipeline<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPipeline").field("name", &self.name).finish()
    }
}

impl<F> Pipeline for FnPipeline<F>
where
    F: Fn(&str) -> Result<Document, PipelineError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Result<Document, PipelineError> {
        (self.annotate)(text)
    }
}
