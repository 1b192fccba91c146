use std::fs;

use crate::support::{create_idea, galaxy, login, run_json, seed_galaxy, setup_test_dir, signup};
use predicates::prelude::*;

fn titles(results: &serde_json::Value) -> Vec<String> {
    results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_related_ranks_by_similarity() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());

    let related = run_json(dir.path(), &["related", &source]);
    assert_eq!(
        titles(&related),
        vec!["Liquid rocket engine", "Orbital fuel depot"]
    );
    assert_eq!(related[0]["similarity"], 0.33);
    assert_eq!(related[0]["user_name"], "Bob");
    assert_eq!(related[0]["status"], "refined");
    assert_eq!(related[0]["brightness"], 0.7);
    assert_eq!(related[1]["similarity"], 0.14);
    assert_eq!(related[1]["user_name"], "Cy");
}

#[test]
fn test_related_human_output() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());

    galaxy()
        .current_dir(dir.path())
        .args(["related", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.33"))
        .stdout(predicate::str::contains("Liquid rocket engine (by Bob)"));
}

#[test]
fn test_related_records_output() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());

    galaxy()
        .current_dir(dir.path())
        .args(["--format", "records", "related", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=related"))
        .stdout(predicate::str::contains("results=2"))
        .stdout(predicate::str::contains("\"Liquid rocket engine\" score=0.33"));
}

#[test]
fn test_related_excludes_own_and_spark_ideas() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());
    create_idea(dir.path(), "Rocket engine tanks", "", "completed");

    let related = run_json(dir.path(), &["related", &source]);
    let titles = titles(&related);
    assert!(!titles.contains(&"Rocket engine tanks".to_string()));
    assert!(!titles.contains(&"Rocket fuel".to_string()));
}

#[test]
fn test_related_unknown_idea() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());

    galaxy()
        .current_dir(dir.path())
        .args(["related", "ida-missing"])
        .assert()
        .code(3);
}

#[test]
fn test_related_nothing_similar() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());
    let lonely = create_idea(dir.path(), "Knitting patterns", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .args(["related", &lonely])
        .assert()
        .success()
        .stdout(predicate::str::contains("No related ideas found"));
}

#[test]
fn test_discover_aggregates_own_ideas() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());

    let report = run_json(dir.path(), &["discover"]);
    assert_eq!(report["cold_start"], false);
    assert_eq!(
        titles(&report["results"]),
        vec!["Liquid rocket engine", "Orbital fuel depot"]
    );
}

#[test]
fn test_discover_cold_start() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());
    signup(dir.path(), "dee@example.com", "Dee");

    let report = run_json(dir.path(), &["discover"]);
    assert_eq!(report["cold_start"], true);
    let mut found = titles(&report["results"]);
    found.sort();
    assert_eq!(found, vec!["Compost worms", "Liquid rocket engine"]);
    for result in report["results"].as_array().unwrap() {
        assert_eq!(result["similarity"], 0.5);
    }

    galaxy()
        .current_dir(dir.path())
        .arg("discover")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have no ideas yet"));
}

#[test]
fn test_discover_dedups_titles() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());
    signup(dir.path(), "eve@example.com", "Eve");
    create_idea(dir.path(), "LIQUID ROCKET ENGINE", "", "completed");
    login(dir.path(), "ada@example.com");

    let report = run_json(dir.path(), &["discover"]);
    let lowered: Vec<String> = titles(&report["results"])
        .iter()
        .map(|t| t.to_lowercase())
        .collect();
    assert_eq!(
        lowered
            .iter()
            .filter(|t| t.as_str() == "liquid rocket engine")
            .count(),
        1
    );
}

#[test]
fn test_profile_shows_public_ideas() {
    let dir = setup_test_dir();
    seed_galaxy(dir.path());
    let cy = run_json(dir.path(), &["login", "cy@example.com"]);
    let cy_id = cy["id"].as_str().unwrap().to_string();
    login(dir.path(), "ada@example.com");

    let profile = run_json(dir.path(), &["profile", &cy_id]);
    assert_eq!(profile["user"]["name"], "Cy");
    assert_eq!(titles(&profile["ideas"]), vec!["Compost worms"]);
    assert_eq!(profile["constellations"].as_array().unwrap().len(), 0);
}

#[test]
fn test_profile_defaults_to_active_user() {
    let dir = setup_test_dir();
    signup(dir.path(), "ada@example.com", "Ada");
    create_idea(dir.path(), "Rocket ship", "", "refined");
    create_idea(dir.path(), "Draft", "", "spark");

    galaxy()
        .current_dir(dir.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Public ideas: 1"))
        .stdout(predicate::str::contains("Rocket ship"));
}

#[test]
fn test_profile_unknown_user() {
    let dir = setup_test_dir();
    galaxy()
        .current_dir(dir.path())
        .args(["profile", "usr-missing"])
        .assert()
        .code(3);
}

#[test]
fn test_keywords_outside_store() {
    let dir = tempfile::tempdir().unwrap();
    galaxy()
        .current_dir(dir.path())
        .args(["keywords", "The", "Rocket", "Ship", "Idea"])
        .assert()
        .success()
        .stdout("rocket ship\n");
}

#[test]
fn test_keywords_json() {
    let dir = setup_test_dir();
    let out = run_json(dir.path(), &["keywords", "Rocket rocket ROCKET fuel"]);
    assert_eq!(out["keywords"], serde_json::json!(["fuel", "rocket"]));
}

#[test]
fn test_extra_stopwords_and_reindex() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());

    fs::write(
        dir.path().join(".galaxy/config.toml"),
        "[keywords]\nextra_stopwords = [\"rocket\"]\n",
    )
    .unwrap();

    let out = run_json(dir.path(), &["reindex"]);
    assert_eq!(out["changed"], 3);

    let idea = run_json(dir.path(), &["idea", "show", &source]);
    assert_eq!(
        idea["keywords"],
        serde_json::json!(["engine", "fuel", "reusable", "tanks"])
    );
}

#[test]
fn test_config_thresholds_apply() {
    let dir = setup_test_dir();
    let source = seed_galaxy(dir.path());

    fs::write(
        dir.path().join(".galaxy/config.toml"),
        "[discovery]\nrelated_threshold = 0.2\n",
    )
    .unwrap();

    let related = run_json(dir.path(), &["related", &source]);
    assert_eq!(titles(&related), vec!["Liquid rocket engine"]);
}
