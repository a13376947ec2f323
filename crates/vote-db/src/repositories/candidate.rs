//! PostgreSQL implementation of CandidateRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vote_core::entities::Candidate;
use vote_core::traits::{CandidateRepository, RepoResult};

use crate::models::CandidateModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CandidateRepository
#[derive(Clone)]
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    /// Create a new PgCandidateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Candidate>> {
        let results = sqlx::query_as::<_, CandidateModel>(
            r"
            SELECT id, name, description
            FROM candidates
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Candidate::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, description: &str) -> RepoResult<Candidate> {
        let model = sqlx::query_as::<_, CandidateModel>(
            r"
            INSERT INTO candidates (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            ",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Candidate::from(model))
    }
}
