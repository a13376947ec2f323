//! Candidate entity - reference data populated out-of-band

use serde::Serialize;

use crate::value_objects::CandidateId;

/// A candidate that can receive votes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub description: String,
}
