//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("in-memory store"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("default categories"));
}

#[test]
fn test_serve_memory_accepts_database_url_from_env() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.toml");
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.args(["serve", "--memory", "--config"])
        .arg(&missing)
        .env("DATABASE_URL", "postgres://localhost/trivia")
        .env("HOME", home.path())
        .current_dir(home.path());

    // Arguments parse; the run stops at the missing config file
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"))
        .stderr(predicate::str::contains("cannot be used with").not());
}

#[test]
fn test_migrate_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate")
        .env_remove("DATABASE_URL")
        .env("HOME", home.path())
        .current_dir(home.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}
