use crate::text::KeywordSet;

/// Jaccard index of two keyword sets: `|A ∩ B| / |A ∪ B|`.
///
/// Returns exactly 0.0 when either set is empty. The result is full
/// precision; rounding happens where scores are reported.
pub fn similarity(a: &KeywordSet, b: &KeywordSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection_len(b);
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Round a score to `precision` decimal places for reporting
pub fn round_score(score: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (score * factor).round() / factor
}
