//! Session extractors
//!
//! Read the signed session token from its cookie and resolve it to a typed
//! [`Session`] through `AuthService::session_from_token`.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use vote_common::{AppError, Session};
use vote_service::{AuthService, Flash, ServiceError, ServiceResult};

use crate::response::FlashRedirect;
use crate::state::AppState;

/// Cookie holding the signed session token
pub const SESSION_COOKIE: &str = "vote_session";

/// Build the session cookie for a freshly issued token
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Resolve the request's session cookie, if any
fn resolve(parts: &Parts, state: &AppState) -> Option<ServiceResult<Session>> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(SESSION_COOKIE)?.value().to_string();

    Some(AuthService::new(state.service_context()).session_from_token(&token))
}

/// The logged-in voter
///
/// Rejects with a redirect to `/login`. An invalid or expired cookie is
/// cleared on the way.
#[derive(Debug, Clone)]
pub struct CurrentVoter(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentVoter
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = FlashRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        match resolve(parts, &app_state) {
            Some(Ok(session)) => Ok(CurrentVoter(session)),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Rejected session cookie");
                let message = match e {
                    ServiceError::App(AppError::SessionExpired) => {
                        "Your session has expired. Please log in again.".to_string()
                    }
                    _ => AppError::MissingAuth.to_string(),
                };
                Err(FlashRedirect::to("/login", Flash::warning(message)).clear_session())
            }
            None => Err(FlashRedirect::to(
                "/login",
                Flash::warning(AppError::MissingAuth.to_string()),
            )),
        }
    }
}

/// The logged-in voter, if any
///
/// Invalid or expired cookies count as no session.
#[derive(Debug, Clone)]
pub struct MaybeVoter(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeVoter
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(MaybeVoter(resolve(parts, &app_state).and_then(Result::ok)))
    }
}
