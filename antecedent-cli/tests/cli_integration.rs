//! Integration tests for the antecedent CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn antecedent() -> Command {
    Command::cargo_bin("antecedent").unwrap()
}

#[test]
fn test_resolve_annotated_document() {
    antecedent()
        .arg("resolve")
        .arg("-i")
        .arg(fixture_path("brca.json"))
        .assert()
        .success()
        .stdout(
            "The BRCA genes are tumor suppressors. \
             Mutations within BRCA genes raise cancer risk.\n",
        );
}

#[test]
fn test_resolve_with_unmatched_prefix_is_verbatim() {
    antecedent()
        .arg("resolve")
        .arg("-i")
        .arg(fixture_path("brca.json"))
        .arg("--prefix")
        .arg("chain_")
        .assert()
        .success()
        .stdout(predicate::str::contains("within these genes raise"));
}

#[test]
fn test_resolve_json_output() {
    antecedent()
        .arg("resolve")
        .arg("-i")
        .arg(fixture_path("brca.json"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("within BRCA genes raise"));
}

#[test]
fn test_resolve_rejects_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    antecedent()
        .arg("resolve")
        .arg("-i")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document"));
}

#[test]
fn test_chunk_with_delimiter() {
    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("sentences.txt"))
        .arg("-b")
        .arg("2")
        .arg("-d")
        .arg(".")
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"A. B.\""))
        .stdout(predicate::str::contains("\"text\": \" C. D.\""))
        .stdout(predicate::str::contains("\"offset\": 5"));
}

#[test]
fn test_chunk_words_markdown() {
    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-b")
        .arg("2")
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("three four"))
        .stdout(predicate::str::contains("*Total segments: 3*"));
}

#[test]
fn test_chunk_text_format_appends_newlines() {
    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("sentences.txt"))
        .arg("-b")
        .arg("2")
        .arg("-d")
        .arg(".")
        .assert()
        .success()
        .stdout("A. B.\n C. D.\n");

    antecedent()
        .arg("chunk")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"json\s+keeps\s+exact\s+chunk").unwrap());
}

#[test]
fn test_chunk_zero_budget_fails() {
    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-b")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("token_budget"));
}

#[test]
fn test_chunk_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("chunks.txt");

    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("words.txt"))
        .arg("-b")
        .arg("5")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "one two three four five\n"
    );
}

#[test]
fn test_inspect_lists_clusters() {
    antecedent()
        .arg("inspect")
        .arg("-i")
        .arg(fixture_path("brca.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Document: 15 tokens"))
        .stdout(predicate::str::contains("Found clusters: 1"))
        .stdout(predicate::str::contains(
            "* coref_clusters_1: [BRCA genes, these genes]",
        ))
        .stdout(predicate::str::contains("  entity_GENE: [BRCA]"));
}

#[test]
fn test_generate_config_then_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("antecedent.toml");

    antecedent()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    antecedent()
        .arg("resolve")
        .arg("-i")
        .arg(fixture_path("brca.json"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("within BRCA genes raise"));
}

#[test]
fn test_missing_input_file() {
    antecedent()
        .arg("chunk")
        .arg("-i")
        .arg("does-not-exist.txt")
        .assert()
        .failure();
}
