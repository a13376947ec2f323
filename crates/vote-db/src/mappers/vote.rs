//! Vote model -> entity mappers

use vote_core::entities::{Candidate, CastVote, Vote};
use vote_core::value_objects::{CandidateId, UserId, VoteId};

use crate::models::{CastVoteModel, VoteModel};

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: VoteId::new(model.id),
            user_id: UserId::new(model.user_id),
            candidate_id: CandidateId::new(model.candidate_id),
            created_at: model.created_at,
        }
    }
}

impl From<CastVoteModel> for CastVote {
    fn from(model: CastVoteModel) -> Self {
        CastVote {
            candidate: Candidate {
                id: CandidateId::new(model.candidate_id),
                name: model.name,
                description: model.description,
            },
            cast_at: model.created_at,
        }
    }
}
