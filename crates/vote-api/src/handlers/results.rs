//! Results page

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use vote_service::{Page, ResultsService, ResultsView};

use crate::flash;
use crate::response::{ApiError, FlashRedirect};
use crate::state::AppState;

/// Vote counts per candidate; no login required
///
/// GET /results
pub async fn results(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Page<ResultsView>>), FlashRedirect> {
    let view = ResultsService::new(state.service_context())
        .results()
        .await
        .map_err(|e| ApiError::from(e).flash_to("/"))?;

    let (jar, pending) = flash::take(jar, state.signer());
    Ok((jar, Json(Page::new("results", view).with_flash(pending))))
}
