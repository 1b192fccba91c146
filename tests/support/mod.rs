use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for galaxy
pub fn galaxy() -> Command {
    cargo_bin_cmd!("galaxy")
}

/// Run a command with `--format json` and parse its stdout
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = galaxy()
        .current_dir(dir)
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "galaxy {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Initialize a store in a fresh temporary directory
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    galaxy()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Sign up a user (who becomes the active user) and return their id
pub fn signup(dir: &Path, email: &str, name: &str) -> String {
    let user = run_json(dir, &["signup", email, "--name", name]);
    user["id"].as_str().unwrap().to_string()
}

/// Switch the active user
pub fn login(dir: &Path, email: &str) {
    galaxy()
        .current_dir(dir)
        .args(["login", email])
        .assert()
        .success();
}

/// Create an idea for the active user and return its id
pub fn create_idea(dir: &Path, title: &str, description: &str, status: &str) -> String {
    let idea = run_json(
        dir,
        &[
            "idea",
            "create",
            title,
            "--description",
            description,
            "--status",
            status,
        ],
    );
    idea["id"].as_str().unwrap().to_string()
}

/// Ada's rocket idea next to ideas from Bob and Cy; Ada ends up logged in.
/// Returns the id of Ada's idea.
#[allow(dead_code)]
pub fn seed_galaxy(dir: &Path) -> String {
    signup(dir, "bob@example.com", "Bob");
    create_idea(dir, "Liquid rocket engine", "", "refined");
    create_idea(dir, "Rocket fuel", "", "spark");

    signup(dir, "cy@example.com", "Cy");
    create_idea(dir, "Compost worms", "Garden soil", "completed");
    create_idea(dir, "Orbital fuel depot", "", "developing");

    signup(dir, "ada@example.com", "Ada");
    create_idea(dir, "Rocket engine", "Reusable rocket fuel tanks", "spark")
}
