use crate::support::{galaxy, run_json, setup_test_dir, signup};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized galaxy store"));

    assert!(dir.path().join(".galaxy/config.toml").exists());
    assert!(dir.path().join(".galaxy/galaxy.db").exists());
}

#[test]
fn test_init_is_idempotent() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

#[test]
fn test_init_explicit_store_path() {
    let dir = tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .args(["--store", "data/journal", "init"])
        .assert()
        .success();
    assert!(dir.path().join("data/journal/config.toml").exists());

    galaxy()
        .current_dir(dir.path())
        .args(["--store", "data/journal", "signup", "ada@example.com", "--name", "Ada"])
        .assert()
        .success();
}

#[test]
fn test_signup_and_whoami() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .args(["signup", "Ada@Example.com", "--name", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed up as Ada <ada@example.com>"));

    galaxy()
        .current_dir(dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada <ada@example.com>"));
}

#[test]
fn test_signup_json_output() {
    let dir = setup_test_dir();
    let user = run_json(dir.path(), &["signup", "ada@example.com", "--name", "Ada"]);
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["name"], "Ada");
    assert!(user["id"].as_str().unwrap().starts_with("usr-"));
}

#[test]
fn test_signup_duplicate_email() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["signup", "ADA@example.com", "--name", "Other"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_signup_invalid_email() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .args(["signup", "not-an-email", "--name", "Ada"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid email"));
}

#[test]
fn test_login_switches_user() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    signup(dir.path(), "bob@example.com", "Bob");

    galaxy()
        .current_dir(dir.path())
        .args(["login", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Ada"));

    let me = run_json(dir.path(), &["whoami"]);
    assert_eq!(me["name"], "Ada");
}

#[test]
fn test_login_unknown_email() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .args(["login", "nobody@example.com"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("user not found"));
}

#[test]
fn test_whoami_without_login() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .arg("whoami")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no active user"));
}

#[test]
fn test_records_output() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["--format", "records", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H galaxy=1 records=1 mode=whoami"))
        .stdout(predicate::str::contains("ada@example.com \"Ada\""));
}
