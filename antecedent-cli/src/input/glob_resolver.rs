//! Expansion of input arguments into file paths

use crate::error::CliError;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Expand each glob pattern and return the matching regular files
///
/// Paths come back sorted and deduplicated, so a file named both literally
/// and through a pattern is processed once. Directories are ignored.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let entries =
            glob::glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for entry in entries {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            }
        }
        log::debug!("'{}' matched {} new file(s)", pattern, files.len() - before);
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching: {}", patterns.join(", "));
    }

    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let pattern = temp_dir.path().join("*.json").display().to_string();
        let exact = temp_dir.path().join("a.json").display().to_string();
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("b.json"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested.json")).unwrap();
        fs::write(temp_dir.path().join("doc.json"), "{}").unwrap();

        let pattern = temp_dir.path().join("*.json").display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("doc.json")]);
    }

    #[test]
    fn test_no_matches() {
        let err = resolve_patterns(&["/nonexistent/dir/*.json".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
