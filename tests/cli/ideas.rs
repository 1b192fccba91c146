use crate::support::{create_idea, galaxy, login, run_json, setup_test_dir, signup};
use predicates::prelude::*;

#[test]
fn test_create_idea_defaults() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    let idea = run_json(dir.path(), &["idea", "create", "The Rocket Ship Idea"]);
    assert!(idea["id"].as_str().unwrap().starts_with("ida-"));
    assert_eq!(idea["status"], "spark");
    assert_eq!(idea["brightness"], 0.3);
    assert_eq!(idea["description"], "");
    assert_eq!(idea["position"]["x"], 0.5);
    assert_eq!(idea["position"]["y"], 0.5);
    assert_eq!(idea["keywords"], serde_json::json!(["rocket", "ship"]));
}

#[test]
fn test_create_idea_human_output() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "create", "Garden robot", "--status", "developing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[developing] Garden robot"));
}

#[test]
fn test_create_idea_with_position() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    let idea = run_json(
        dir.path(),
        &["idea", "create", "Garden robot", "--position", "0.1,0.9"],
    );
    assert_eq!(idea["position"]["x"], 0.1);
    assert_eq!(idea["position"]["y"], 0.9);
}

#[test]
fn test_create_idea_requires_login() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .args(["idea", "create", "Orphan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no active user"));
}

#[test]
fn test_create_idea_unknown_status() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "create", "Thing", "--status", "finished"])
        .assert()
        .code(2);
}

#[test]
fn test_list_ideas_only_own_oldest_first() {
    let dir = setup_test_dir();
    signup(dir.path(), "bob@example.com", "Bob");
    create_idea(dir.path(), "Bob idea", "", "spark");
    signup(dir.path(), "ada@example.com", "Ada");
    create_idea(dir.path(), "First", "", "spark");
    create_idea(dir.path(), "Second", "", "refined");

    let ideas = run_json(dir.path(), &["idea", "list"]);
    let titles: Vec<&str> = ideas
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn test_list_ideas_empty() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ideas yet"));
}

#[test]
fn test_show_idea_of_other_user_not_found() {
    let dir = setup_test_dir();
    signup(dir.path(), "bob@example.com", "Bob");
    let theirs = create_idea(dir.path(), "Bob idea", "", "spark");
    signup(dir.path(), "ada@example.com", "Ada");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "show", &theirs])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("idea not found"));
}

#[test]
fn test_show_idea_human() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let id = create_idea(dir.path(), "Rocket ship", "Reusable boosters", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reusable boosters"))
        .stdout(predicate::str::contains("keywords: boosters, reusable, rocket, ship"));
}

#[test]
fn test_update_idea_patch() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let id = create_idea(dir.path(), "Rocket ship", "Reusable boosters", "spark");

    let idea = run_json(
        dir.path(),
        &["idea", "update", &id, "--status", "completed", "--title", "Garden robot"],
    );
    assert_eq!(idea["title"], "Garden robot");
    assert_eq!(idea["description"], "Reusable boosters");
    assert_eq!(idea["status"], "completed");
    assert_eq!(idea["brightness"], 1.0);
    assert_eq!(
        idea["keywords"],
        serde_json::json!(["boosters", "garden", "reusable", "robot"])
    );
}

#[test]
fn test_update_idea_without_fields() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let id = create_idea(dir.path(), "Rocket ship", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "update", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn test_delete_idea() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let id = create_idea(dir.path(), "Rocket ship", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted idea"));

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "show", &id])
        .assert()
        .code(3);
}

#[test]
fn test_delete_other_users_idea_not_found() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let id = create_idea(dir.path(), "Rocket ship", "", "spark");
    signup(dir.path(), "bob@example.com", "Bob");

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "delete", &id])
        .assert()
        .code(3);

    login(dir.path(), "ada@example.com");
    galaxy()
        .current_dir(dir.path())
        .args(["idea", "show", &id])
        .assert()
        .success();
}
