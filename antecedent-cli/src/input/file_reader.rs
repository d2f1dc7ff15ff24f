//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use antecedent_core::Document;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read an annotated document serialized as JSON
    pub fn read_document(path: &Path) -> Result<Document> {
        let content = Self::read_text(path)?;
        let doc = serde_json::from_str(&content)
            .map_err(|e| CliError::InvalidDocument(format!("{}: {e}", path.display())))?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "The BRCA genes are known.\nMutations within these genes.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::read_text(path).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_read_text_utf8_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("utf8.txt");

        let content = "Alzheimer’s disease 世界 🌍";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("doc.json");
        fs::write(
            &file_path,
            r#"{"tokens": [{"start": 0, "text": "Hi", "whitespace": " "}, {"start": 3, "text": "there"}]}"#,
        )
        .unwrap();

        let doc = FileReader::read_document(&file_path).unwrap();
        assert_eq!(doc.text(), "Hi there");
        assert!(doc.span_groups.is_empty());
    }

    #[test]
    fn test_read_document_rejects_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.json");
        fs::write(&file_path, "{\"tokens\": 3}").unwrap();

        let err = FileReader::read_document(&file_path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid document:"));
    }
}
