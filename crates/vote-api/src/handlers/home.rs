//! Landing page

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use vote_service::{HomeView, Page};

use crate::extractors::MaybeVoter;
use crate::flash;
use crate::state::AppState;

/// Landing page
///
/// GET /
///
/// Logged-in voters go straight to the dashboard, unless a flash is pending:
/// that flash usually reports a dashboard failure, and bouncing back would loop.
pub async fn home(
    State(state): State<AppState>,
    MaybeVoter(session): MaybeVoter,
    jar: CookieJar,
) -> Response {
    if session.is_some() && !flash::is_pending(&jar, state.signer()) {
        return Redirect::to("/dashboard").into_response();
    }

    let (jar, pending) = flash::take(jar, state.signer());
    let page = Page::new("home", HomeView::new(&state.config().app.name)).with_flash(pending);

    (jar, Json(page)).into_response()
}
