use std::collections::HashSet;

use super::calculation::similarity;
use super::ranking::sort_by_score;
use super::{CandidateIdea, ScoredIdea};
use crate::idea::Idea;
use crate::text::KeywordSet;

/// Rank candidates against a user's aggregate keyword set.
///
/// Like [`rank_related`](super::rank_related), but candidates whose title
/// matches an already accepted candidate (case-insensitively) are dropped.
/// Deduplication follows pool order, so the first candidate seen wins.
pub fn discover<'a>(
    query: &KeywordSet,
    candidates: &[CandidateIdea<'a>],
    threshold: f64,
    limit: usize,
) -> Vec<ScoredIdea<'a>> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut scored = Vec::new();

    for candidate in candidates {
        let score = similarity(query, &candidate.keywords);
        if score <= threshold {
            continue;
        }
        if !seen_titles.insert(candidate.idea.title.to_lowercase()) {
            continue;
        }
        scored.push(ScoredIdea {
            idea: candidate.idea,
            score,
        });
    }

    sort_by_score(&mut scored);
    scored.truncate(limit);
    scored
}

/// Feed for users who have no ideas yet: the first `limit` public ideas of
/// the pool, each carrying the same placeholder score. No similarity is
/// computed.
pub fn cold_start(pool: &[Idea], limit: usize, placeholder_score: f64) -> Vec<ScoredIdea<'_>> {
    pool.iter()
        .filter(|idea| idea.status.is_public())
        .take(limit)
        .map(|idea| ScoredIdea {
            idea,
            score: placeholder_score,
        })
        .collect()
}
