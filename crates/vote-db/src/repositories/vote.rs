//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use vote_core::entities::{CandidateTally, CastOutcome, CastVote, Tally, Vote};
use vote_core::error::DomainError;
use vote_core::traits::{RepoResult, VoteRepository};
use vote_core::value_objects::{CandidateId, UserId};

use crate::models::{CandidateTallyModel, CastVoteModel, VoteModel};

use super::error::{
    candidate_not_found, is_foreign_key_violation, is_unique_violation, map_db_error,
    user_not_found,
};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    /// Every early return drops `tx` uncommitted, which rolls it back.
    #[instrument(skip(self))]
    async fn cast(&self, user_id: UserId, candidate_id: CandidateId) -> RepoResult<CastOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock serializes concurrent submissions from the same user
        let has_voted = sqlx::query_scalar::<_, bool>(
            r"
            SELECT has_voted FROM users WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(user_id))?;

        if has_voted {
            debug!("User has already voted");
            return Ok(CastOutcome::AlreadyVoted);
        }

        let inserted = sqlx::query_as::<_, VoteModel>(
            r"
            INSERT INTO votes (user_id, candidate_id)
            VALUES ($1, $2)
            RETURNING id, user_id, candidate_id, created_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(candidate_id.into_inner())
        .fetch_one(&mut *tx)
        .await;

        let vote = match inserted {
            Ok(model) => Vote::from(model),
            Err(e) if is_unique_violation(&e) => return Ok(CastOutcome::AlreadyVoted),
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(candidate_not_found(candidate_id))
            }
            Err(e) => return Err(map_db_error(e)),
        };

        let updated = sqlx::query(
            r"
            UPDATE users SET has_voted = TRUE
            WHERE id = $1 AND has_voted = FALSE
            ",
        )
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() != 1 {
            return Err(DomainError::DatabaseError(
                "voter flag was not updated".to_string(),
            ));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(CastOutcome::Recorded(vote))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<CastVote>> {
        let result = sqlx::query_as::<_, CastVoteModel>(
            r"
            SELECT c.id AS candidate_id, c.name, c.description, v.created_at
            FROM votes v
            INNER JOIN candidates c ON c.id = v.candidate_id
            WHERE v.user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CastVote::from))
    }

    #[instrument(skip(self))]
    async fn tally(&self) -> RepoResult<Tally> {
        let rows = sqlx::query_as::<_, CandidateTallyModel>(
            r"
            SELECT c.id, c.name, c.description, COUNT(v.id) AS vote_count
            FROM candidates c
            LEFT JOIN votes v ON v.candidate_id = c.id
            GROUP BY c.id, c.name, c.description
            ORDER BY vote_count DESC, c.id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Tally::from_counts(
            rows.into_iter().map(CandidateTally::from).collect(),
        ))
    }

    #[instrument(skip(self))]
    async fn count_for_user(&self, user_id: UserId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM votes WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
