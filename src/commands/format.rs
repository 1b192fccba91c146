//! Shared output helpers for commands
//!
//! Records lines start with a one-letter tag: `H` header, `U` user, `I` idea,
//! `C` constellation, `R` related idea, `K` keyword.

use galaxy_core::constellation::Constellation;
use galaxy_core::error::Result;
use galaxy_core::idea::Idea;
use galaxy_core::records::{escape_quotes, single_line};
use galaxy_core::similarity::RelatedCandidate;
use galaxy_core::user::User;
use serde_json::json;

/// Pretty-print a JSON value on stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a Records format header
///
/// ```ignore
/// print_records_header("idea.list", &[("ideas", "3")]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, &str)]) {
    let mut parts = vec!["H galaxy=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

pub fn user_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id,
        "email": user.email,
        "name": user.name,
        "created_at": user.created_at.to_rfc3339(),
    })
}

pub fn user_record(user: &User) -> String {
    format!(
        "U {} {} \"{}\"",
        user.id,
        user.email,
        escape_quotes(&user.name)
    )
}

pub fn idea_json(idea: &Idea) -> serde_json::Value {
    json!({
        "id": idea.id,
        "user_id": idea.user_id,
        "title": idea.title,
        "description": idea.description,
        "status": idea.status,
        "brightness": idea.brightness(),
        "position": idea.position,
        "keywords": idea.keywords.get().map(|k| k.to_vec()).unwrap_or_default(),
        "created_at": idea.created_at.to_rfc3339(),
        "updated_at": idea.updated_at.to_rfc3339(),
    })
}

pub fn idea_record(idea: &Idea) -> String {
    format!(
        "I {} {} \"{}\" brightness={} x={} y={}",
        idea.id,
        idea.status,
        escape_quotes(&single_line(&idea.title)),
        idea.brightness(),
        idea.position.x,
        idea.position.y
    )
}

/// One-line human summary of an idea
pub fn idea_line(idea: &Idea) -> String {
    format!("{} [{}] {}", idea.id, idea.status, idea.title)
}

pub fn constellation_json(constellation: &Constellation) -> serde_json::Value {
    json!({
        "id": constellation.id,
        "user_id": constellation.user_id,
        "idea_id_1": constellation.idea_id_1,
        "idea_id_2": constellation.idea_id_2,
        "created_at": constellation.created_at.to_rfc3339(),
    })
}

pub fn constellation_record(constellation: &Constellation) -> String {
    format!(
        "C {} {} {}",
        constellation.id, constellation.idea_id_1, constellation.idea_id_2
    )
}

pub fn constellation_line(constellation: &Constellation) -> String {
    format!(
        "{} {} <-> {}",
        constellation.id, constellation.idea_id_1, constellation.idea_id_2
    )
}

/// Human and records rendering of ranked ideas
pub fn print_candidates_human(candidates: &[RelatedCandidate]) {
    for candidate in candidates {
        println!(
            "{:.2}  {} [{}] {} (by {})",
            candidate.similarity,
            candidate.id,
            candidate.status,
            candidate.title,
            candidate.user_name
        );
    }
}

pub fn print_candidates_records(candidates: &[RelatedCandidate]) {
    for candidate in candidates {
        println!(
            "R {} {} \"{}\" score={} user={} user_name=\"{}\"",
            candidate.id,
            candidate.status,
            escape_quotes(&single_line(&candidate.title)),
            candidate.similarity,
            candidate.user_id,
            escape_quotes(&candidate.user_name)
        );
    }
}
