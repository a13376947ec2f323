//! Candidate model -> entity mappers

use vote_core::entities::{Candidate, CandidateTally};
use vote_core::value_objects::CandidateId;

use crate::models::{CandidateModel, CandidateTallyModel};

impl From<CandidateModel> for Candidate {
    fn from(model: CandidateModel) -> Self {
        Candidate {
            id: CandidateId::new(model.id),
            name: model.name,
            description: model.description,
        }
    }
}

impl From<CandidateTallyModel> for CandidateTally {
    fn from(model: CandidateTallyModel) -> Self {
        CandidateTally {
            candidate: Candidate {
                id: CandidateId::new(model.id),
                name: model.name,
                description: model.description,
            },
            votes: model.vote_count,
        }
    }
}
