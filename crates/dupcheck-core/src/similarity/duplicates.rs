use crate::similarity::ScoredDocument;

/// Keep documents scoring at or above `threshold`.
///
/// Results are sorted by score in descending order; documents with equal
/// scores keep their corpus order.
pub fn filter_matches(scores: &[ScoredDocument], threshold: f64) -> Vec<ScoredDocument> {
    let mut matches: Vec<ScoredDocument> = scores
        .iter()
        .filter(|scored| scored.score >= threshold)
        .copied()
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
