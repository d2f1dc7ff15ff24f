//! Reference resolution
//!
//! Rewrites a document so that every later mention of a coreference cluster
//! reads as the cluster's first mention. The first token of a rewritten
//! mention carries the antecedent text followed by the token's own trailing
//! whitespace; the remaining tokens of the mention are dropped. Everything
//! else is emitted verbatim.

use crate::config::{OverlapPolicy, ResolverConfig};
use crate::document::Document;
use crate::error::ResolveError;
use std::ops::Range;

/// Resolved text plus what it took to produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Document text with mentions replaced by their antecedents
    pub text: String,
    /// Clusters that rewrote at least one mention
    pub clusters_applied: usize,
    /// Mentions replaced by an antecedent
    pub mentions_rewritten: usize,
    /// Tokens dropped because they sat inside a rewritten mention
    pub tokens_elided: usize,
}

/// A cluster's hold on one token
///
/// `replacement` is `None` for antecedent tokens, which are emitted verbatim.
#[derive(Debug, Clone)]
struct Claim<'d> {
    cluster: &'d str,
    replacement: Option<String>,
}

/// Coreference rewriter
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Rewrite `doc`, replacing non-first mentions with their antecedent
    ///
    /// Span groups without the cluster prefix are ignored. Spans that do not
    /// fit the document are skipped, and a cluster whose antecedent does not
    /// fit is skipped entirely. Each cluster owns its antecedent tokens before
    /// any mention is rewritten, and the overlap policy is applied to whole
    /// mentions. Fails only under [`OverlapPolicy::Reject`].
    pub fn resolve(&self, doc: &Document) -> Result<Resolution, ResolveError> {
        let mut table: Vec<Option<Claim<'_>>> = vec![None; doc.tokens.len()];

        let mut clusters = Vec::new();
        for cluster in doc.clusters(&self.config.cluster_prefix) {
            let Some(antecedent) = cluster.antecedent() else {
                continue;
            };
            let Some(antecedent_text) = antecedent.text(doc) else {
                log::warn!(
                    "skipping cluster '{}': antecedent {}..{} does not fit {} tokens",
                    cluster.name,
                    antecedent.start,
                    antecedent.end,
                    doc.tokens.len()
                );
                continue;
            };

            if self.admit(&table, antecedent.start..antecedent.end, &cluster.name)? {
                for slot in &mut table[antecedent.start..antecedent.end] {
                    *slot = Some(Claim {
                        cluster: &cluster.name,
                        replacement: None,
                    });
                }
            }
            clusters.push((cluster, antecedent_text));
        }

        let mut clusters_applied = 0;
        let mut mentions_rewritten = 0;
        for (cluster, antecedent_text) in clusters {
            let mut rewrote = false;
            for mention in &cluster.spans[1..] {
                let Some(tokens) = mention.tokens(doc) else {
                    log::warn!(
                        "skipping mention {}..{} in cluster '{}'",
                        mention.start,
                        mention.end,
                        cluster.name
                    );
                    continue;
                };
                if !self.admit(&table, mention.start..mention.end, &cluster.name)? {
                    continue;
                }

                let mut replacement = antecedent_text.clone();
                replacement.push_str(&tokens[0].whitespace);
                table[mention.start] = Some(Claim {
                    cluster: &cluster.name,
                    replacement: Some(replacement),
                });
                for slot in &mut table[mention.start + 1..mention.end] {
                    *slot = Some(Claim {
                        cluster: &cluster.name,
                        replacement: Some(String::new()),
                    });
                }

                mentions_rewritten += 1;
                rewrote = true;
            }

            if rewrote {
                log::debug!(
                    "cluster '{}' resolved to '{}' ({} mentions)",
                    cluster.name,
                    antecedent_text,
                    cluster.spans.len()
                );
                clusters_applied += 1;
            }
        }

        let mut text = String::new();
        let mut tokens_elided = 0;
        for (token, slot) in doc.tokens.iter().zip(&table) {
            match slot.as_ref().and_then(|claim| claim.replacement.as_deref()) {
                Some(replacement) => {
                    if replacement.is_empty() {
                        tokens_elided += 1;
                    }
                    text.push_str(replacement);
                }
                None => {
                    text.push_str(&token.text);
                    text.push_str(&token.whitespace);
                }
            }
        }

        Ok(Resolution {
            text,
            clusters_applied,
            mentions_rewritten,
            tokens_elided,
        })
    }

    /// Whether `cluster` may write `tokens`, given what other clusters hold
    fn admit(
        &self,
        table: &[Option<Claim<'_>>],
        tokens: Range<usize>,
        cluster: &str,
    ) -> Result<bool, ResolveError> {
        let held = tokens.clone().find_map(|index| {
            table[index]
                .as_ref()
                .filter(|claim| claim.cluster != cluster)
                .map(|claim| (index, claim.cluster))
        });
        let Some((token, holder)) = held else {
            return Ok(true);
        };

        match self.config.overlap {
            OverlapPolicy::LastWins => Ok(true),
            OverlapPolicy::FirstWins => {
                log::debug!(
                    "'{}' keeps token {}; skipping {}..{} of '{}'",
                    holder,
                    token,
                    tokens.start,
                    tokens.end,
                    cluster
                );
                Ok(false)
            }
            OverlapPolicy::Reject => Err(ResolveError::OverlappingMentions {
                token,
                first: holder.to_string(),
                second: cluster.to_string(),
            }),
        }
    }
}

/// Resolve `doc` with the default configuration
pub fn resolve(doc: &Document) -> String {
    // The default last-wins policy never rejects.
    Resolver::default()
        .resolve(doc)
        .map_or_else(|_| doc.text(), |resolution| resolution.text)
}

/// Overview of one span group
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSummary {
    /// Group name
    pub name: String,
    /// Whether the resolver treats the group as a coreference cluster
    pub is_cluster: bool,
    /// Surface text of each span that fits the document
    pub mentions: Vec<String>,
}

/// Summarize every span group of `doc`, flagging clusters by `prefix`
pub fn summarize_groups(doc: &Document, prefix: &str) -> Vec<GroupSummary> {
    doc.span_groups
        .iter()
        .map(|group| GroupSummary {
            name: group.name.clone(),
            is_cluster: group.is_cluster(prefix),
            mentions: group.spans.iter().filter_map(|s| s.text(doc)).collect(),
        })
        .collect()
}
