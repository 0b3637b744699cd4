//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CHAPTER_LENGTH_DEFAULT_CATEGORY")
        .env_remove("CHAPTER_LENGTH_LOG_LEVEL");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["default_category"], "A full paragraph");
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"log_level = "debug""#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".chapter-length.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("stories").join("draft");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(
        tmp.path().join("chapter-length.toml"),
        r#"default_category = "A small paragraph""#,
    )
    .unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["default_category"], "A small paragraph");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.yaml"),
        "default_category: few-sentences\nlog_level: warn\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["default_category"], "A few sentences");
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.json"),
        r#"{"default_category": "A few paragraphs", "max_input_bytes": 2048}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["default_category"], "A few paragraphs");
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

#[test]
fn disable_input_limit_reports_no_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        "max_input_bytes = 16\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"log_level = "error""#,
    )
    .unwrap();
    fs::write(
        sub_dir.join(".chapter-length.toml"),
        r#"log_level = "debug""#,
    )
    .unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"default_category = "A sentence""#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("chapter-length.toml"),
        r#"default_category = "A few sentences""#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["default_category"], "A few sentences");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"log_level = "debug""#,
    )
    .unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["log_level"], "error");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"default_category = "A sentence""#,
    )
    .unwrap();

    let output = cmd()
        .env("CHAPTER_LENGTH_DEFAULT_CATEGORY", "few-paragraphs")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["default_category"], "A few paragraphs");
}

#[test]
fn default_category_drives_check() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"default_category = "A sentence""#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("chapter.txt"),
        "This is a valid sentence with fifteen words in total.",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "chapter.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A sentence"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".chapter-length.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_default_category_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        r#"default_category = "A novella""#,
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A novella"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".chapter-length.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::write(parent.join(".chapter-length.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default; boundary stops search"
    );
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".chapter-length.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(json["config"]["config_file"].as_str().is_some());
}
