use super::calculation::similarity;
use super::{CandidateIdea, ScoredIdea};
use crate::text::KeywordSet;

/// Score every candidate against `source`, keep scores strictly above
/// `threshold`, sort best first and keep at most `limit`.
pub fn rank_related<'a>(
    source: &KeywordSet,
    candidates: &[CandidateIdea<'a>],
    threshold: f64,
    limit: usize,
) -> Vec<ScoredIdea<'a>> {
    let mut scored: Vec<ScoredIdea<'a>> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = similarity(source, &candidate.keywords);
            (score > threshold).then_some(ScoredIdea {
                idea: candidate.idea,
                score,
            })
        })
        .collect();

    sort_by_score(&mut scored);
    scored.truncate(limit);
    scored
}

/// Descending score; equal scores fall back to ascending idea id
pub(super) fn sort_by_score(scored: &mut [ScoredIdea<'_>]) {
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.idea.id.cmp(&b.idea.id))
    });
}
