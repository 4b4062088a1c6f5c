//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.
//! `XDG_CONFIG_HOME` is pinned to a scratch directory so a developer's own
//! user config cannot leak into assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path, xdg: &Path) -> Value {
    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg)
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

/// Tempdir pair: a working directory plus an empty XDG config home.
fn workspace() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let (tmp, xdg) = workspace();
    let json = info_json(tmp.path(), xdg.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
    assert!(json["config"]["max_grade"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 9.0\n").unwrap();

    let json = info_json(tmp.path(), xdg.path());

    assert_eq!(json["config"]["max_grade"], 9.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".prosemeter.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join("prosemeter.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path(), xdg.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("prosemeter.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let (tmp, xdg) = workspace();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 6.0\n").unwrap();

    let json = info_json(&sub_dir, xdg.path());

    assert_eq!(json["config"]["max_grade"], 6.0);
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn closest_directory_wins_without_merging() {
    let (tmp, xdg) = workspace();
    fs::write(
        tmp.path().join(".prosemeter.toml"),
        "max_grade = 5.0\nmin_word_length = 4\n",
    )
    .unwrap();

    let sub_dir = tmp.path().join("sub");
    fs::create_dir(&sub_dir).unwrap();
    fs::write(sub_dir.join(".prosemeter.toml"), "max_grade = 9.0\n").unwrap();

    let json = info_json(&sub_dir, xdg.path());

    assert_eq!(json["config"]["max_grade"], 9.0);
    assert!(
        json["config"]["min_word_length"].is_null(),
        "ancestor config should not bleed through"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let (tmp, xdg) = workspace();

    // Both configs exist; the regular file (higher precedence) should win
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 5.0\n").unwrap();
    fs::write(tmp.path().join("prosemeter.toml"), "max_grade = 9.0\n").unwrap();

    let json = info_json(tmp.path(), xdg.path());

    assert_eq!(
        json["config"]["max_grade"], 9.0,
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.yaml"), "log_level: debug\n").unwrap();

    let json = info_json(tmp.path(), xdg.path());
    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn parses_json_config() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.json"), r#"{"max_grade": 7.5}"#).unwrap();

    let json = info_json(tmp.path(), xdg.path());
    assert_eq!(json["config"]["max_grade"], 7.5);
}

// =============================================================================
// Git Boundary
// =============================================================================

#[test]
fn search_stops_at_git_boundary() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 5.0\n").unwrap();

    let repo = tmp.path().join("repo");
    let inner = repo.join("src");
    fs::create_dir_all(&inner).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&inner, xdg.path());

    assert!(
        json["config"]["max_grade"].is_null(),
        "config above the repo root must not be picked up"
    );
}

#[test]
fn config_beside_git_marker_is_found() {
    let (tmp, xdg) = workspace();
    let repo = tmp.path().join("repo");
    let inner = repo.join("src");
    fs::create_dir_all(&inner).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".prosemeter.toml"), "max_grade = 4.0\n").unwrap();

    let json = info_json(&inner, xdg.path());
    assert_eq!(json["config"]["max_grade"], 4.0);
}

// =============================================================================
// Explicit --config Flag
// =============================================================================

#[test]
fn explicit_config_overrides_discovered() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 5.0\n").unwrap();
    let override_path = tmp.path().join("override.toml");
    fs::write(&override_path, "max_grade = 11.0\n").unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            override_path.to_str().unwrap(),
            "info",
            "--json",
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    assert_eq!(json["config"]["max_grade"], 11.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"));
}

#[test]
fn missing_explicit_config_fails() {
    let (tmp, xdg) = workspace();
    cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            "/nonexistent/prosemeter.toml",
            "info",
        ])
        .assert()
        .failure();
}

#[test]
fn invalid_toml_fails_with_config_error() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = [not toml\n").unwrap();

    cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

// =============================================================================
// Environment Variables
// =============================================================================

#[test]
fn env_var_overrides_project_file() {
    let (tmp, xdg) = workspace();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 9.0\n").unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .env("PROSEMETER_MAX_GRADE", "3.5")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    assert_eq!(json["config"]["max_grade"], 3.5);
}

#[test]
fn env_var_sets_log_level() {
    let (tmp, xdg) = workspace();
    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .env("PROSEMETER_LOG_LEVEL", "warn")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// User Config (XDG)
// =============================================================================

#[test]
fn user_config_loaded_when_no_project_config() {
    let (tmp, xdg) = workspace();
    let user_dir = xdg.path().join("prosemeter");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "max_grade = 6.5\n").unwrap();

    let json = info_json(tmp.path(), xdg.path());

    assert_eq!(json["config"]["max_grade"], 6.5);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("config.toml"));
}

#[test]
fn project_config_overrides_user_config() {
    let (tmp, xdg) = workspace();
    let user_dir = xdg.path().join("prosemeter");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "max_grade = 6.5\n").unwrap();
    fs::write(tmp.path().join(".prosemeter.toml"), "max_grade = 9.0\n").unwrap();

    let json = info_json(tmp.path(), xdg.path());
    assert_eq!(json["config"]["max_grade"], 9.0);
}

// =============================================================================
// Config Flowing Into Analysis
// =============================================================================

#[test]
fn reading_speeds_config_replaces_presets() {
    let (tmp, xdg) = workspace();
    fs::write(
        tmp.path().join(".prosemeter.toml"),
        "[reading_speeds]\nskim = 600\n",
    )
    .unwrap();

    let doc = tmp.path().join("doc.txt");
    fs::write(&doc, "word ".repeat(600)).unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "reading-time",
            doc.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    assert_eq!(json["skim"]["formatted"], "1 min");
    assert!(
        json["average"].is_null(),
        "configured speeds replace the built-in presets"
    );
}

#[test]
fn stop_words_config_replaces_defaults() {
    let (tmp, xdg) = workspace();
    fs::write(
        tmp.path().join(".prosemeter.toml"),
        "stop_words = [\"cat\"]\n",
    )
    .unwrap();

    let doc = tmp.path().join("doc.txt");
    fs::write(&doc, "the cat sat").unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "frequency",
            doc.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    let words: Vec<&str> = json["top_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["word"].as_str().unwrap())
        .collect();
    assert!(words.contains(&"the"), "default stop list was replaced");
    assert!(!words.contains(&"cat"), "configured stop word still filters");
}

#[test]
fn extra_stop_words_extend_defaults() {
    let (tmp, xdg) = workspace();
    fs::write(
        tmp.path().join(".prosemeter.toml"),
        "extra_stop_words = [\"sat\"]\n",
    )
    .unwrap();

    let doc = tmp.path().join("doc.txt");
    fs::write(&doc, "the cat sat").unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", xdg.path())
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "frequency",
            doc.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_slice(&output.get_output().stdout).expect("invalid JSON output");
    let words: Vec<&str> = json["top_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec!["cat"], "the and sat are both filtered");
}
