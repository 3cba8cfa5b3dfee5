//! Binary-level tests for `cb`
//!
//! These never reach a model: they only exercise paths that end before the
//! first generation call.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cb(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cb").expect("cb binary should build");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

#[test]
fn test_exit_keyword_ends_session_without_model() {
    let home = TempDir::new().unwrap();

    cb(&home)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("환영합니다 AI 챗봇"))
        .stdout(predicate::str::contains("Type 'exit' to quit."));
}

#[test]
fn test_uppercase_exit_keyword() {
    let home = TempDir::new().unwrap();

    cb(&home).write_stdin("EXIT\n").assert().success();
}

#[test]
fn test_empty_stdin_ends_session() {
    let home = TempDir::new().unwrap();

    cb(&home).write_stdin("").assert().success();
}

#[test]
fn test_exit_keyword_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yml");
    std::fs::write(&config, "session:\n  exit-keyword: bye\n").unwrap();

    cb(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("BYE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'bye' to quit."));
}

#[test]
fn test_unknown_provider_fails() {
    let home = TempDir::new().unwrap();

    cb(&home)
        .args(["--provider", "carrier-pigeon"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown LLM provider"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();

    cb(&home)
        .args(["--config", "does-not-exist.yml"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
