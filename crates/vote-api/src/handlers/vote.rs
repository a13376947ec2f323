//! Vote casting

use axum::extract::State;
use vote_core::entities::CastOutcome;
use vote_service::{BallotService, Flash};

use crate::extractors::{CandidatePath, CurrentVoter};
use crate::response::{ApiError, FlashRedirect};
use crate::state::AppState;

/// Cast the voter's single ballot
///
/// POST /vote/:candidate_id
///
/// Always lands back on the dashboard; a repeat vote is reported with a
/// warning, not an error.
pub async fn cast_vote(
    State(state): State<AppState>,
    CurrentVoter(session): CurrentVoter,
    path: Result<CandidatePath, ApiError>,
) -> FlashRedirect {
    let CandidatePath(candidate_id) = match path {
        Ok(path) => path,
        Err(e) => return e.flash_to("/dashboard"),
    };

    match BallotService::new(state.service_context())
        .cast_vote(&session, candidate_id)
        .await
    {
        Ok(CastOutcome::Recorded(_)) => {
            FlashRedirect::to("/dashboard", Flash::success("Vote cast successfully!"))
        }
        Ok(CastOutcome::AlreadyVoted) => {
            FlashRedirect::to("/dashboard", Flash::warning("You have already voted!"))
        }
        Err(e) if e.is_unknown_user() => {
            FlashRedirect::to("/login", Flash::warning("Please log in again.")).clear_session()
        }
        Err(e) => ApiError::from(e).flash_to("/dashboard"),
    }
}
