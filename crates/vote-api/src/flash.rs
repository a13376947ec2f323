//! Flash messages carried across a redirect
//!
//! The pending message lives in a cookie as a token signed with the session
//! secret, so a client can neither forge one nor edit its text. The next page
//! view reads it and clears the cookie.
//!
//! Handlers never write the cookie themselves: a [`FlashRedirect`] leaves its
//! flash in the response extensions and [`write_pending`] seals it on the way
//! out.
//!
//! [`FlashRedirect`]: crate::response::FlashRedirect

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use vote_common::SessionService;
use vote_service::Flash;

use crate::state::AppState;

/// Cookie holding the pending flash message
pub const FLASH_COOKIE: &str = "vote_flash";

/// How long an unread flash stays valid
pub const FLASH_TTL_SECONDS: i64 = 300;

/// Sign a flash into a cookie-safe string
pub fn seal(signer: &SessionService, flash: &Flash) -> Option<String> {
    match signer.seal(flash, FLASH_TTL_SECONDS) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(error = %e, "Dropping flash message");
            None
        }
    }
}

/// Read a cookie value; forged, edited or stale values yield `None`
pub fn open(signer: &SessionService, value: &str) -> Option<Flash> {
    signer.unseal(value)
}

/// Queue a flash for the next page view
pub fn push(jar: CookieJar, signer: &SessionService, flash: &Flash) -> CookieJar {
    match seal(signer, flash) {
        Some(value) => jar.add(
            Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build(),
        ),
        None => jar,
    }
}

/// Consume the pending flash, clearing its cookie
///
/// A cookie that fails verification is cleared too, and nothing is shown.
pub fn take(jar: CookieJar, signer: &SessionService) -> (CookieJar, Option<Flash>) {
    let Some(flash) = jar.get(FLASH_COOKIE).map(|c| open(signer, c.value())) else {
        return (jar, None);
    };

    if flash.is_none() {
        tracing::warn!("Discarding unverifiable flash cookie");
    }

    (jar.add(removal_cookie(FLASH_COOKIE)), flash)
}

/// Whether a readable flash is waiting to be shown
pub fn is_pending(jar: &CookieJar, signer: &SessionService) -> bool {
    jar.get(FLASH_COOKIE)
        .is_some_and(|c| open(signer, c.value()).is_some())
}

/// A cookie that makes the browser drop `name`
///
/// Built explicitly because `CookieJar::remove` only emits a removal for
/// cookies that arrived with the request.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie
}

/// Middleware that turns a flash left in the response extensions into a
/// signed cookie
pub async fn write_pending(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Flash>() {
        Some(flash) => {
            let jar = push(CookieJar::new(), state.signer(), &flash);
            (jar, response).into_response()
        }
        None => response,
    }
}
