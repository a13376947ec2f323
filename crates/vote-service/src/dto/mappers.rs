//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to view models.

use vote_common::Session;
use vote_core::entities::{Candidate, CandidateTally, CastVote, Tally, User};

use super::responses::{
    CandidateResponse, CastVoteResponse, ResultsView, TallyRowResponse, VoterResponse,
};

// ============================================================================
// Voter Mappers
// ============================================================================

impl From<&User> for VoterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            handle: user.handle.to_string(),
            display_name: user.display_name.clone(),
        }
    }
}

impl From<&Session> for VoterResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id.to_string(),
            handle: session.handle.to_string(),
            display_name: session.display_name.clone(),
        }
    }
}

// ============================================================================
// Candidate Mappers
// ============================================================================

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id.into_inner(),
            name: candidate.name,
            description: candidate.description,
        }
    }
}

impl From<CastVote> for CastVoteResponse {
    fn from(vote: CastVote) -> Self {
        Self {
            candidate: CandidateResponse::from(vote.candidate),
            cast_at: vote.cast_at,
        }
    }
}

// ============================================================================
// Results Mappers
// ============================================================================

impl From<CandidateTally> for TallyRowResponse {
    fn from(row: CandidateTally) -> Self {
        Self {
            id: row.candidate.id.into_inner(),
            name: row.candidate.name,
            description: row.candidate.description,
            votes: row.votes,
        }
    }
}

/// Order and total come straight from the tally
impl From<Tally> for ResultsView {
    fn from(tally: Tally) -> Self {
        Self {
            results: tally
                .candidates
                .into_iter()
                .map(TallyRowResponse::from)
                .collect(),
            total: tally.total,
        }
    }
}
