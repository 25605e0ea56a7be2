//! Integration tests for the `mselkit` binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! error handling — all without requiring a live server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mselkit` binary with env isolation.
///
/// Clears all `MSEL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn mselkit_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mselkit");
    cmd.env("HOME", "/tmp/mselkit-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/mselkit-cli-test-nonexistent")
        .env_remove("MSEL_PROFILE")
        .env_remove("MSEL_SERVER")
        .env_remove("MSEL_TOKEN")
        .env_remove("MSEL_OUTPUT")
        .env_remove("MSEL_INSECURE")
        .env_remove("MSEL_TIMEOUT")
        .env_remove("MSEL_ID");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = mselkit_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    mselkit_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("scenario event")
            .and(predicate::str::contains("msel"))
            .and(predicate::str::contains("catalog"))
            .and(predicate::str::contains("team")),
    );
}

#[test]
fn test_version_flag() {
    mselkit_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mselkit"));
}

#[test]
fn test_list_args_shown_in_subcommand_help() {
    mselkit_cmd()
        .args(["msel", "list", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--filter")
                .and(predicate::str::contains("--sort"))
                .and(predicate::str::contains("--page-size")),
        );
}

// ── Completions ─────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    mselkit_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mselkit"));
}

// ── Error handling without a server ─────────────────────────────────

#[test]
fn test_list_without_config_fails_with_usage_error() {
    let output = mselkit_cmd().args(["msel", "list"]).output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("config") || text.contains("server"),
        "Expected config guidance in output:\n{text}"
    );
}

#[test]
fn test_server_flag_without_token_reports_missing_token() {
    let output = mselkit_cmd()
        .args(["--server", "https://msel.example.com", "msel", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("token"),
        "Expected token guidance in output:\n{text}"
    );
}

#[test]
fn test_invalid_uuid_is_a_usage_error() {
    let output = mselkit_cmd()
        .args([
            "--server",
            "https://msel.example.com",
            "--token",
            "abc",
            "msel",
            "show",
            "not-a-uuid",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_event_list_requires_msel_id() {
    let output = mselkit_cmd()
        .args([
            "--server",
            "https://msel.example.com",
            "--token",
            "abc",
            "event",
            "list",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("--msel") || text.contains("MSEL_ID"),
        "Expected msel-id guidance in output:\n{text}"
    );
}

// ── Config commands (no server needed) ──────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    mselkit_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
