//! Candidate database models

use sqlx::FromRow;

/// Database model for candidates table
#[derive(Debug, Clone, FromRow)]
pub struct CandidateModel {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Candidate row joined with its vote count (results query)
#[derive(Debug, Clone, FromRow)]
pub struct CandidateTallyModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub vote_count: i64,
}
