use crate::support::galaxy;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    galaxy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: galaxy"))
        .stdout(predicate::str::contains("discover"))
        .stdout(predicate::str::contains("related"));
}

#[test]
fn test_version_flag() {
    galaxy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("galaxy"));
}

#[test]
fn test_no_command_prints_banner() {
    galaxy()
        .assert()
        .success()
        .stdout(predicate::str::contains("galaxy --help"));
}

#[test]
fn test_missing_store() {
    let dir = tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .arg("discover")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_missing_store_json_envelope() {
    let dir = tempdir().unwrap();
    let output = galaxy()
        .current_dir(dir.path())
        .args(["--format", "json", "discover"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "store_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let output = galaxy()
        .args(["--format", "json", "explode"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .args(["-q", "whoami"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    std::fs::write(
        dir.path().join(".galaxy/config.toml"),
        "[discovery]\nrelated_limit = 0\n",
    )
    .unwrap();

    galaxy()
        .current_dir(dir.path())
        .arg("discover")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("discovery.related_limit"));
}
