//! Tally - aggregated vote counts per candidate

use serde::Serialize;

use crate::entities::Candidate;

/// Number of votes received by one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateTally {
    pub candidate: Candidate,
    pub votes: i64,
}

/// Per-candidate counts plus the grand total
///
/// Rows are ordered by vote count descending, ties broken by candidate id
/// ascending. `total` is always the sum of the per-candidate counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub candidates: Vec<CandidateTally>,
    pub total: i64,
}

impl Tally {
    /// Build a tally from unordered per-candidate counts
    pub fn from_counts(mut candidates: Vec<CandidateTally>) -> Self {
        candidates.sort_by(|a, b| {
            b.votes
                .cmp(&a.votes)
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });
        let total = candidates.iter().map(|c| c.votes).sum();

        Self { candidates, total }
    }
}
