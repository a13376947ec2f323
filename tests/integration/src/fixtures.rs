//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::Deserialize;
use vote_core::{Candidate, CandidateRepository};
use vote_db::{PgCandidateRepository, PgPool};

use crate::helpers::{assert_redirect, Browser};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixes in the clock so reruns against the same database do not collide.
pub fn unique_suffix() -> String {
    let micros = chrono::Utc::now().timestamp_micros() % 1_000_000_000_000;
    format!("{micros}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Registration form
#[derive(Debug, Clone)]
pub struct Registration {
    pub handle: String,
    pub display_name: String,
    pub password: String,
}

impl Registration {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let handle: String = format!("u{suffix}").chars().take(20).collect();
        Self {
            display_name: format!("Voter {suffix}"),
            handle,
            password: "TestPass123!".to_string(),
        }
    }

    /// Form fields with matching confirmation
    pub fn fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("handle", self.handle.as_str()),
            ("display_name", self.display_name.as_str()),
            ("password", self.password.as_str()),
            ("confirm_password", self.password.as_str()),
        ]
    }

    /// Login form fields for this account
    pub fn login_fields(&self) -> Vec<(&str, &str)> {
        vec![
            ("handle", self.handle.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// Register a fresh account through the page routes
pub async fn register(browser: &Browser) -> Result<Registration> {
    let registration = Registration::unique();
    let response = browser.post_form("/register", &registration.fields()).await?;
    assert_redirect(&response, "/login")?;
    Ok(registration)
}

/// Register and log in, leaving the session in the browser's cookie jar
pub async fn register_and_login(browser: &Browser) -> Result<Registration> {
    let registration = register(browser).await?;
    let response = browser.post_form("/login", &registration.login_fields()).await?;
    assert_redirect(&response, "/dashboard")?;
    Ok(registration)
}

/// Insert candidates with unique names
pub async fn seed_candidates(pool: &PgPool, labels: &[&str]) -> Result<Vec<Candidate>> {
    let repo = PgCandidateRepository::new(pool.clone());
    let suffix = unique_suffix();

    let mut created = Vec::with_capacity(labels.len());
    for label in labels {
        let candidate = repo
            .create(&format!("{label} {suffix}"), &format!("Candidate {label}"))
            .await?;
        created.push(candidate);
    }
    Ok(created)
}

/// Page envelope as served
#[derive(Debug, Deserialize)]
pub struct PageBody<T> {
    pub page: String,
    pub flash: Option<FlashBody>,
    pub data: T,
}

/// Flash message as served
#[derive(Debug, Deserialize)]
pub struct FlashBody {
    pub level: String,
    pub message: String,
}

/// Voter summary
#[derive(Debug, Deserialize)]
pub struct VoterBody {
    pub id: String,
    pub handle: String,
    pub display_name: String,
}

/// Candidate row
#[derive(Debug, Deserialize)]
pub struct CandidateBody {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// The vote already cast
#[derive(Debug, Deserialize)]
pub struct CastVoteBody {
    pub candidate: CandidateBody,
    pub cast_at: String,
}

/// Dashboard data
#[derive(Debug, Deserialize)]
pub struct DashboardBody {
    pub voter: VoterBody,
    pub status: String,
    #[serde(default)]
    pub candidates: Vec<CandidateBody>,
    pub vote: Option<CastVoteBody>,
}

/// One results row
#[derive(Debug, Deserialize)]
pub struct TallyRowBody {
    pub id: i64,
    pub name: String,
    pub votes: i64,
}

/// Results data
#[derive(Debug, Deserialize)]
pub struct ResultsBody {
    pub results: Vec<TallyRowBody>,
    pub total: i64,
}

impl ResultsBody {
    /// Votes recorded for a candidate, if it is listed
    pub fn votes_for(&self, candidate: &Candidate) -> Option<i64> {
        self.results
            .iter()
            .find(|row| row.id == candidate.id.into_inner())
            .map(|row| row.votes)
    }
}
