//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Candidate, CastOutcome, CastVote, NewUser, Tally, User};
use crate::error::DomainError;
use crate::value_objects::{CandidateId, Handle, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by login handle
    async fn find_by_handle(&self, handle: &Handle) -> RepoResult<Option<User>>;

    /// Check if a handle is already registered
    async fn handle_exists(&self, handle: &Handle) -> RepoResult<bool>;

    /// Create a new user with `has_voted = false`
    ///
    /// Fails with `DomainError::HandleTaken` if the handle is already registered.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Candidate Repository
// ============================================================================

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// List all candidates ordered by id
    async fn list(&self) -> RepoResult<Vec<Candidate>>;

    /// Insert a candidate (provisioning only; no HTTP route reaches this)
    async fn create(&self, name: &str, description: &str) -> RepoResult<Candidate>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Cast a ballot for `user_id`
    ///
    /// Inserting the vote row and setting the user's `has_voted` flag happen in a
    /// single transaction: either both are written or neither is. A user who has
    /// already voted gets `CastOutcome::AlreadyVoted` and nothing is written.
    async fn cast(&self, user_id: UserId, candidate_id: CandidateId) -> RepoResult<CastOutcome>;

    /// Find the ballot a user cast, joined with its candidate
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<CastVote>>;

    /// Count votes per candidate (including candidates with zero votes)
    async fn tally(&self) -> RepoResult<Tally>;

    /// Number of vote rows referencing a user (0 or 1)
    async fn count_for_user(&self, user_id: UserId) -> RepoResult<i64>;
}
