//! End-to-end tests for the thoughts binary
//!
//! These run the compiled binary with a controlled environment (HOME,
//! PACKAGE_VERSION, working directory) and assert on stdout/stderr and exit
//! status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CONFIG: &str = r#"{"thoughts":{"thoughtsRepo":"r","reposDir":"/d","globalDir":"/g","user":"alice","repoMappings":{"proj":"proj-path"}}}"#;

/// Binary under test with a hermetic environment rooted in the given dirs
fn thoughts_cmd(cwd: &TempDir, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thoughts").unwrap();
    cmd.current_dir(cwd.path())
        .env("HOME", home.path())
        .env_remove("PACKAGE_VERSION");
    cmd
}

// ============================================================================
// BOOTSTRAP BEHAVIOR
// ============================================================================

#[test]
fn test_no_arguments_prints_help_and_exits_zero() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Developer thoughts and notes management system",
        ));
}

#[test]
fn test_version_flag_uses_compiled_in_fallback() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_flag_honors_package_version_override() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .env("PACKAGE_VERSION", "9.9.9-test")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.9.9-test"));
}

#[test]
fn test_unknown_subcommand_is_a_usage_error() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home).arg("frobnicate").assert().failure();
}

// ============================================================================
// CONFIG PATH
// ============================================================================

#[test]
fn test_config_path_defaults_to_home_location() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".thoughts").join("config.json");

    thoughts_cmd(&cwd, &home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_str().unwrap()));
}

#[test]
fn test_config_path_prefers_cwd_candidate() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(cwd.path().join("thoughts.json"), SAMPLE_CONFIG).unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout("thoughts.json\n");
}

#[test]
fn test_config_path_echoes_explicit_path() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["--config", "/nonexistent/custom.json", "config", "path"])
        .assert()
        .success()
        .stdout("/nonexistent/custom.json\n");
}

// ============================================================================
// CONFIG SHOW
// ============================================================================

#[test]
fn test_config_show_json_from_cwd_candidate() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(cwd.path().join("thoughts.json"), SAMPLE_CONFIG).unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"user\": \"alice\""))
        .stdout(predicate::str::contains("\"proj\": \"proj-path\""));
}

#[test]
fn test_config_show_human_summary() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(cwd.path().join("thoughts.json"), SAMPLE_CONFIG).unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User:          alice"))
        .stdout(predicate::str::contains("proj -> proj-path"));
}

#[test]
fn test_config_show_corrupt_candidate_warns_and_degrades() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(cwd.path().join("thoughts.json"), "{broken").unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("thoughts.json"))
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_config_show_missing_explicit_config_fails() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["--config", "/nonexistent/custom.json", "config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_show_corrupt_explicit_config_fails() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let explicit = cwd.path().join("custom.json");
    fs::write(&explicit, "{broken").unwrap();

    thoughts_cmd(&cwd, &home)
        .args(["--config", explicit.to_str().unwrap(), "config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

// ============================================================================
// CONFIG INIT
// ============================================================================

#[test]
fn test_config_init_writes_default_location_and_reports() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .args([
            "config",
            "init",
            "--thoughts-repo",
            "/notes",
            "--user",
            "bob",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing config to"))
        .stdout(predicate::str::contains("Config saved successfully"));

    let written = home.path().join(".thoughts").join("config.json");
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.contains("\"user\": \"bob\""));
    assert!(content.contains("\"reposDir\": \"/notes/repos\""));
}

#[test]
fn test_config_init_then_show_round_trip() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    thoughts_cmd(&cwd, &home)
        .args([
            "config",
            "init",
            "--thoughts-repo",
            "/notes",
            "--user",
            "bob",
        ])
        .assert()
        .success();

    thoughts_cmd(&cwd, &home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User:          bob"))
        .stdout(predicate::str::contains("Thoughts repo: /notes"));
}

#[test]
fn test_config_init_refuses_overwrite_without_force() {
    let cwd = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let init_args = [
        "config",
        "init",
        "--thoughts-repo",
        "/notes",
        "--user",
        "bob",
    ];

    thoughts_cmd(&cwd, &home).args(init_args).assert().success();

    thoughts_cmd(&cwd, &home)
        .args(init_args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let mut forced = init_args.to_vec();
    forced.push("--force");
    thoughts_cmd(&cwd, &home).args(forced).assert().success();
}
