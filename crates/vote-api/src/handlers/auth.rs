//! Authentication handlers
//!
//! Registration, login and logout.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use vote_service::{AuthService, Flash, FormView, LoginRequest, Page, RegisterRequest};

use crate::extractors::{session_cookie, ValidatedForm};
use crate::flash;
use crate::response::{ApiError, FlashRedirect};
use crate::state::AppState;

/// Registration form
///
/// GET /register
pub async fn register_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<FormView>>) {
    let (jar, pending) = flash::take(jar, state.signer());
    (jar, Json(Page::new("register", FormView::register()).with_flash(pending)))
}

/// Create an account
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    form: Result<ValidatedForm<RegisterRequest>, ApiError>,
) -> FlashRedirect {
    let request = match form {
        Ok(ValidatedForm(request)) => request,
        Err(e) => return e.flash_to("/register"),
    };

    match AuthService::new(state.service_context()).register(request).await {
        Ok(_) => FlashRedirect::to("/login", Flash::success("Registration successful! Please log in.")),
        Err(e) => ApiError::from(e).flash_to("/register"),
    }
}

/// Login form
///
/// GET /login
pub async fn login_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Page<FormView>>) {
    let (jar, pending) = flash::take(jar, state.signer());
    (jar, Json(Page::new("login", FormView::login()).with_flash(pending)))
}

/// Establish a session
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<ValidatedForm<LoginRequest>, ApiError>,
) -> Result<(CookieJar, FlashRedirect), FlashRedirect> {
    let ValidatedForm(request) = form.map_err(|e| e.flash_to("/login"))?;

    let authenticated = AuthService::new(state.service_context())
        .login(request)
        .await
        .map_err(|e| ApiError::from(e).flash_to("/login"))?;

    let jar = jar.add(session_cookie(authenticated.token, state.secure_cookies()));
    let welcome = format!("Welcome, {}!", authenticated.session.display_name);

    Ok((jar, FlashRedirect::to("/dashboard", Flash::success(welcome))))
}

/// Clear the session; safe to call without one
///
/// GET /logout
pub async fn logout() -> FlashRedirect {
    FlashRedirect::to("/", Flash::info("You have been logged out.")).clear_session()
}
