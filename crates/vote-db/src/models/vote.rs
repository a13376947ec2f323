//! Vote database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub user_id: i64,
    pub candidate_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A vote joined with the candidate it went to
#[derive(Debug, Clone, FromRow)]
pub struct CastVoteModel {
    pub candidate_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
