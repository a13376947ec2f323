//! Dashboard page

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use vote_service::{BallotService, DashboardView, Flash, Page};

use crate::extractors::CurrentVoter;
use crate::flash;
use crate::response::{ApiError, FlashRedirect};
use crate::state::AppState;

/// The ballot, or the vote already cast
///
/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentVoter(session): CurrentVoter,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Page<DashboardView>>), FlashRedirect> {
    let view = BallotService::new(state.service_context())
        .dashboard(&session)
        .await
        .map_err(|e| {
            if e.is_unknown_user() {
                tracing::warn!(user_id = %session.user_id, "Session refers to a missing user");
                FlashRedirect::to("/login", Flash::warning("Please log in again.")).clear_session()
            } else {
                ApiError::from(e).flash_to("/")
            }
        })?;

    let (jar, pending) = flash::take(jar, state.signer());
    Ok((jar, Json(Page::new("dashboard", view).with_flash(pending))))
}
