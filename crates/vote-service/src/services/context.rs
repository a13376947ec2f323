//! Service context - dependency container for services
//!
//! Holds the database pool, repositories and the session token service.

use std::sync::Arc;

use vote_common::SessionService;
use vote_core::traits::{CandidateRepository, UserRepository, VoteRepository};
use vote_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// Repositories are trait objects so tests can substitute in-memory stores.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    candidate_repo: Arc<dyn CandidateRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    // Services
    session_service: Arc<SessionService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        candidate_repo: Arc<dyn CandidateRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            candidate_repo,
            vote_repo,
            session_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the candidate repository
    pub fn candidate_repo(&self) -> &dyn CandidateRepository {
        self.candidate_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    // === Services ===

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    candidate_repo: Option<Arc<dyn CandidateRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    session_service: Option<Arc<SessionService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn candidate_repo(mut self, repo: Arc<dyn CandidateRepository>) -> Self {
        self.candidate_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.candidate_repo
                .ok_or_else(|| ServiceError::validation("candidate_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.session_service
                .ok_or_else(|| ServiceError::validation("session_service is required"))?,
        ))
    }
}
