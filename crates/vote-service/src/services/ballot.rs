//! Ballot service
//!
//! Builds the dashboard and casts votes.

use tracing::{info, instrument, warn};
use vote_common::Session;
use vote_core::entities::CastOutcome;
use vote_core::value_objects::CandidateId;
use vote_core::DomainError;

use crate::dto::{BallotState, CandidateResponse, CastVoteResponse, DashboardView, VoterResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ballot service
pub struct BallotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BallotService<'a> {
    /// Create a new BallotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Dashboard for the session's user: the open ballot, or the vote already cast
    ///
    /// Fails with `DomainError::UserNotFound` if the account behind the
    /// session no longer exists.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn dashboard(&self, session: &Session) -> ServiceResult<DashboardView> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(session.user_id))?;

        let ballot = if user.has_voted {
            let vote = self
                .ctx
                .vote_repo()
                .find_by_user(user.id)
                .await?
                .ok_or(DomainError::VoteRecordMissing(user.id))?;

            BallotState::Voted {
                vote: CastVoteResponse::from(vote),
            }
        } else {
            let candidates = self.ctx.candidate_repo().list().await?;

            BallotState::Open {
                candidates: candidates.into_iter().map(CandidateResponse::from).collect(),
            }
        };

        Ok(DashboardView {
            voter: VoterResponse::from(&user),
            ballot,
        })
    }

    /// Cast the session user's single vote
    ///
    /// A repeat submission is not an error: it returns
    /// `CastOutcome::AlreadyVoted` and changes nothing.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn cast_vote(
        &self,
        session: &Session,
        candidate_id: CandidateId,
    ) -> ServiceResult<CastOutcome> {
        let outcome = self
            .ctx
            .vote_repo()
            .cast(session.user_id, candidate_id)
            .await?;

        match &outcome {
            CastOutcome::Recorded(vote) => {
                info!(vote_id = %vote.id, candidate_id = %candidate_id, "Vote recorded");
            }
            CastOutcome::AlreadyVoted => {
                warn!(candidate_id = %candidate_id, "Duplicate vote attempt ignored");
            }
        }

        Ok(outcome)
    }
}
