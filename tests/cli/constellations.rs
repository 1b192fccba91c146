use crate::support::{create_idea, galaxy, run_json, setup_test_dir, signup};
use predicates::prelude::*;

#[test]
fn test_create_and_list_constellation() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let a = create_idea(dir.path(), "Rocket ship", "", "spark");
    let b = create_idea(dir.path(), "Orbital depot", "", "spark");

    let link = run_json(dir.path(), &["constellation", "create", &a, &b]);
    assert!(link["id"].as_str().unwrap().starts_with("con-"));
    assert_eq!(link["idea_id_1"], a.as_str());
    assert_eq!(link["idea_id_2"], b.as_str());

    let links = run_json(dir.path(), &["constellation", "list"]);
    assert_eq!(links.as_array().unwrap().len(), 1);
}

#[test]
fn test_duplicate_constellation_either_direction() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let a = create_idea(dir.path(), "Rocket ship", "", "spark");
    let b = create_idea(dir.path(), "Orbital depot", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "create", &a, &b])
        .assert()
        .success();

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "create", &b, &a])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("constellation already exists"));
}

#[test]
fn test_self_link_rejected() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let a = create_idea(dir.path(), "Rocket ship", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "create", &a, &a])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be linked to itself"));
}

#[test]
fn test_link_requires_owning_both_ideas() {
    let dir = setup_test_dir();
    signup(dir.path(), "bob@example.com", "Bob");
    let theirs = create_idea(dir.path(), "Bob idea", "", "refined");
    signup(dir.path(), "ada@example.com", "Ada");
    let mine = create_idea(dir.path(), "Rocket ship", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "create", &mine, &theirs])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("one or both ideas not found"));
}

#[test]
fn test_delete_constellation() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let a = create_idea(dir.path(), "Rocket ship", "", "spark");
    let b = create_idea(dir.path(), "Orbital depot", "", "spark");
    let link = run_json(dir.path(), &["constellation", "create", &a, &b]);
    let id = link["id"].as_str().unwrap();

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "delete", id])
        .assert()
        .success();

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "delete", id])
        .assert()
        .code(3);

    galaxy()
        .current_dir(dir.path())
        .args(["constellation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No constellations yet"));
}

#[test]
fn test_deleting_idea_removes_its_constellations() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    let a = create_idea(dir.path(), "Rocket ship", "", "spark");
    let b = create_idea(dir.path(), "Orbital depot", "", "spark");
    let c = create_idea(dir.path(), "Garden robot", "", "spark");
    run_json(dir.path(), &["constellation", "create", &a, &b]);
    run_json(dir.path(), &["constellation", "create", &b, &c]);

    galaxy()
        .current_dir(dir.path())
        .args(["idea", "delete", &a])
        .assert()
        .success();

    let links = run_json(dir.path(), &["constellation", "list"]);
    let links = links.as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["idea_id_1"], b.as_str());
}
