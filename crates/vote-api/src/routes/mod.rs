//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, dashboard, health, home, results, vote};
use crate::state::AppState;

/// Create the page router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(auth_routes())
        .merge(ballot_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Registration, login and logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Dashboard, voting and results
fn ballot_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/vote/:candidate_id", post(vote::cast_vote))
        .route("/results", get(results::results))
}
