//! Inspect command implementation

use crate::input::FileReader;
use anyhow::Result;
use antecedent_core::{summarize_groups, GroupSummary, COREF_CLUSTER_PREFIX};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Annotated JSON document
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Span group name prefix that marks coreference clusters
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let doc = FileReader::read_document(&self.input)?;
        let prefix = self.prefix.as_deref().unwrap_or(COREF_CLUSTER_PREFIX);
        let groups = summarize_groups(&doc, prefix);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.json {
            serde_json::to_writer_pretty(&mut out, &groups)?;
            writeln!(out)?;
        } else {
            writeln!(out, "Document: {} tokens", doc.tokens.len())?;
            write_groups(&mut out, &groups)?;
            if let Err(e) = doc.validate() {
                writeln!(out, "Warning: {e}")?;
            }
        }
        Ok(())
    }
}

fn write_groups(out: &mut impl Write, groups: &[GroupSummary]) -> Result<()> {
    let clusters = groups.iter().filter(|g| g.is_cluster).count();
    writeln!(out, "Found clusters: {clusters}")?;
    for group in groups {
        let marker = if group.is_cluster { "*" } else { " " };
        writeln!(out, "{marker} {}: [{}]", group.name, group.mentions.join(", "))?;
    }
    Ok(())
}
