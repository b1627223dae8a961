//! Integration tests for the clarity CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn clarity() -> Command {
    let mut cmd = Command::cargo_bin("clarity").unwrap();
    cmd.env_remove("CLARITY_CONFIG");
    cmd
}

#[test]
fn test_analyze_file() {
    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("messy-note.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Don't forget the meeting. We should have left early, thanks!",
        ))
        .stdout(predicate::str::contains("[contraction] 'dont' -> 'don't'"))
        .stdout(predicate::str::contains("[slang] 'thx' -> 'thanks'"))
        .stdout(predicate::str::contains("[grammar]"))
        .stdout(predicate::str::contains("Statistics:"))
        .stdout(predicate::str::contains("Diff:"));
}

#[test]
fn test_analyze_stdin() {
    let mut cmd = clarity();
    cmd.arg("analyze").write_stdin("dont forget");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Don't forget\n"))
        .stdout(predicate::str::contains("Changes (1):"));
}

#[test]
fn test_analyze_clean_text() {
    let mut cmd = clarity();
    cmd.arg("analyze").arg("-i").arg(fixture_path("clean.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The cat sat on the mat."))
        .stdout(predicate::str::contains("Changes (0):"))
        .stdout(predicate::str::contains("  none"))
        .stdout(predicate::str::contains("Diff:").not());
}

#[test]
fn test_analyze_json_output() {
    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("jargon-note.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(
        json["polished"],
        "Our small services coordination has high delay."
    );
    assert_eq!(json["stats"]["total_changes"], 3);
    assert_eq!(json["stats"]["by_category"]["jargon"], 3);
    assert!(json["diff_pairs"].as_array().unwrap().len() >= 3);
    assert_eq!(json["changes"][0]["category"], "jargon");
}

#[test]
fn test_analyze_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.json");

    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("messy-note.txt"))
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_path);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        json["original"],
        "dont forget the meeting.   we should of left early , thx !\n"
    );
}

#[test]
fn test_analyze_missing_input() {
    let mut cmd = clarity();
    cmd.arg("analyze").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_analyze_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clarity.toml");
    fs::write(
        &config_path,
        r#"
[analysis.jargon]
match_case = true

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("-c")
        .arg(&config_path)
        .write_stdin("latency is bad. latency hurts.");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "\"polished\":\"Delay is bad. Delay hurts.\"",
        ));
}

#[test]
fn test_analyze_with_config_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clarity.toml");
    fs::write(&config_path, "[analysis.jargon]\nreplace_all = false\n").unwrap();

    let mut cmd = Command::cargo_bin("clarity").unwrap();
    cmd.env("CLARITY_CONFIG", &config_path)
        .arg("analyze")
        .write_stdin("latency is bad. latency hurts.");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Delay is bad. Latency hurts.\n",
        ));
}

#[test]
fn test_analyze_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("clarity.toml");
    fs::write(&config_path, "[analysis.spelling]\nthreshold = 140.0\n").unwrap();

    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("-c")
        .arg(&config_path)
        .write_stdin("hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_analyze_with_generated_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = temp_dir.path().join("team.toml");

    clarity()
        .arg("generate-config")
        .arg("-o")
        .arg(&lexicon_path)
        .arg("--code")
        .arg("team")
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    clarity()
        .arg("validate")
        .arg("--lexicon")
        .arg(&lexicon_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexicon is valid"))
        .stdout(predicate::str::contains("Code: team"));

    clarity()
        .arg("analyze")
        .arg("--lexicon")
        .arg(&lexicon_path)
        .write_stdin("we will circle back on the roadmap")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "We will follow up on the roadmap\n",
        ));
}

#[test]
fn test_analyze_with_extra_words() {
    let temp_dir = TempDir::new().unwrap();
    let words_path = temp_dir.path().join("words.txt");
    fs::write(&words_path, "# team vocabulary\nzorblax\n").unwrap();

    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("--words")
        .arg(&words_path)
        .write_stdin("the zorblax is here");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("The zorblax is here\n"))
        .stdout(predicate::str::contains("Changes (0):"));
}

#[test]
fn test_analyze_missing_word_list() {
    let mut cmd = clarity();
    cmd.arg("analyze")
        .arg("--words")
        .arg("nonexistent-words.txt")
        .write_stdin("hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_explain_terms() {
    let mut cmd = clarity();
    cmd.arg("explain").arg("idempotent").arg("flibbertigibbet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "idempotent -> safely repeatable [architecture]",
        ))
        .stdout(predicate::str::contains("Doing it twice"))
        .stdout(predicate::str::contains(
            "flibbertigibbet: no simpler term available",
        ));
}

#[test]
fn test_explain_scans_file() {
    let mut cmd = clarity();
    cmd.arg("explain")
        .arg("-i")
        .arg(fixture_path("jargon-note.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let findings = json["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0]["term"], "microservices");
    assert_eq!(findings[2]["replacement"], "delay");
}

#[test]
fn test_explain_without_jargon() {
    let mut cmd = clarity();
    cmd.arg("explain").write_stdin("The cat sat on the mat.");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No jargon found."));
}

#[test]
fn test_validate_invalid_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = temp_dir.path().join("broken.toml");
    fs::write(
        &lexicon_path,
        r#"
[metadata]
code = "broken"
name = "Broken"

[[grammar]]
pattern = "(unclosed"
replacement = "x"
"#,
    )
    .unwrap();

    let mut cmd = clarity();
    cmd.arg("validate").arg("--lexicon").arg(&lexicon_path);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Lexicon is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_list_jargon() {
    let mut cmd = clarity();
    cmd.arg("list").arg("jargon");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jargon terms"))
        .stdout(predicate::str::is_match(r"latency\s+delay\s+performance").unwrap());
}

#[test]
fn test_list_formats() {
    let mut cmd = clarity();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_help() {
    let mut cmd = clarity();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("explain"));
}
