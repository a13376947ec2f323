//! Vote entity - one immutable ballot per user

use chrono::{DateTime, Utc};

use crate::entities::Candidate;
use crate::value_objects::{CandidateId, UserId, VoteId};

/// A recorded ballot linking one user to one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub user_id: UserId,
    pub candidate_id: CandidateId,
    pub created_at: DateTime<Utc>,
}

/// A user's ballot joined with the candidate it went to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVote {
    pub candidate: Candidate,
    pub cast_at: DateTime<Utc>,
}

/// Result of attempting to cast a ballot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastOutcome {
    /// The vote row was inserted and the user's flag was set
    Recorded(Vote),
    /// The user had already voted; nothing was written
    AlreadyVoted,
}

impl CastOutcome {
    #[inline]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}
