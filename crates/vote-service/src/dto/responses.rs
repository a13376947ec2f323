//! Page view models
//!
//! Every page is rendered as a JSON view model wrapped in [`Page`], which also
//! carries the flash message left by the previous redirect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Flash Messages
// ============================================================================

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

/// One-shot message shown on the page after a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Danger, message)
    }
}

// ============================================================================
// Page Wrapper
// ============================================================================

/// A rendered page: its name, the pending flash (if any) and the view model
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub page: &'static str,
    pub flash: Option<Flash>,
    pub data: T,
}

impl<T> Page<T> {
    pub fn new(page: &'static str, data: T) -> Self {
        Self {
            page,
            flash: None,
            data,
        }
    }

    /// Attach the flash consumed from the request
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }
}

// ============================================================================
// Landing & Forms
// ============================================================================

/// Landing page for visitors without a session
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub app_name: String,
    pub register_url: &'static str,
    pub login_url: &'static str,
    pub results_url: &'static str,
}

impl HomeView {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            register_url: "/register",
            login_url: "/login",
            results_url: "/results",
        }
    }
}

/// Describes a form: where it posts and which fields it expects
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: &'static [&'static str],
}

impl FormView {
    pub fn register() -> Self {
        Self {
            action: "/register",
            method: "POST",
            fields: &["handle", "display_name", "email", "password", "confirm_password"],
        }
    }

    pub fn login() -> Self {
        Self {
            action: "/login",
            method: "POST",
            fields: &["handle", "password"],
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// The logged-in voter
#[derive(Debug, Clone, Serialize)]
pub struct VoterResponse {
    pub id: String,
    pub handle: String,
    pub display_name: String,
}

/// A candidate on the ballot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// The ballot a voter already cast
#[derive(Debug, Clone, Serialize)]
pub struct CastVoteResponse {
    pub candidate: CandidateResponse,
    pub cast_at: DateTime<Utc>,
}

/// Either the open ballot or the vote already cast
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BallotState {
    Open { candidates: Vec<CandidateResponse> },
    Voted { vote: CastVoteResponse },
}

/// Dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub voter: VoterResponse,
    #[serde(flatten)]
    pub ballot: BallotState,
}

impl DashboardView {
    #[inline]
    pub fn has_voted(&self) -> bool {
        matches!(self.ballot, BallotState::Voted { .. })
    }
}

// ============================================================================
// Results
// ============================================================================

/// One candidate's line in the results table
#[derive(Debug, Clone, Serialize)]
pub struct TallyRowResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub votes: i64,
}

/// Results page: per-candidate counts, highest first, and their sum
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub results: Vec<TallyRowResponse>,
    pub total: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
