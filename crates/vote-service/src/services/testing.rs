//! In-memory repository fakes for service tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;

use vote_common::SessionService;
use vote_core::entities::{
    Candidate, CandidateTally, CastOutcome, CastVote, NewUser, Tally, User, Vote,
};
use vote_core::error::DomainError;
use vote_core::traits::{CandidateRepository, RepoResult, UserRepository, VoteRepository};
use vote_core::value_objects::{CandidateId, Handle, UserId, VoteId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    candidates: Vec<Candidate>,
    votes: Vec<Vote>,
}

/// One lock over all tables, so `cast` is atomic like the real transaction
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub(crate) fn vote_count(&self) -> usize {
        self.state.lock().unwrap().votes.len()
    }

    /// Remove a user row, as if deleted out-of-band
    pub(crate) fn forget_user(&self, id: UserId) {
        self.state.lock().unwrap().users.retain(|(u, _)| u.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_handle(&self, handle: &Handle) -> RepoResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| &u.handle == handle)
            .map(|(u, _)| u.clone()))
    }

    async fn handle_exists(&self, handle: &Handle) -> RepoResult<bool> {
        Ok(self.find_by_handle(handle).await?.is_some())
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|(u, _)| u.handle == user.handle) {
            return Err(DomainError::HandleTaken);
        }

        let created = User {
            id: UserId::new(state.users.len() as i64 + 1),
            handle: user.handle.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            has_voted: false,
            created_at: Utc::now(),
        };
        state.users.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl CandidateRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Candidate>> {
        Ok(self.state.lock().unwrap().candidates.clone())
    }

    async fn create(&self, name: &str, description: &str) -> RepoResult<Candidate> {
        let mut state = self.state.lock().unwrap();
        let candidate = Candidate {
            id: CandidateId::new(state.candidates.len() as i64 + 1),
            name: name.to_string(),
            description: description.to_string(),
        };
        state.candidates.push(candidate.clone());
        Ok(candidate)
    }
}

#[async_trait]
impl VoteRepository for InMemoryStore {
    async fn cast(&self, user_id: UserId, candidate_id: CandidateId) -> RepoResult<CastOutcome> {
        let mut state = self.state.lock().unwrap();

        let Some(index) = state.users.iter().position(|(u, _)| u.id == user_id) else {
            return Err(DomainError::UserNotFound(user_id));
        };
        if state.users[index].0.has_voted {
            return Ok(CastOutcome::AlreadyVoted);
        }
        if !state.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(DomainError::CandidateNotFound(candidate_id));
        }

        let vote = Vote {
            id: VoteId::new(state.votes.len() as i64 + 1),
            user_id,
            candidate_id,
            created_at: Utc::now(),
        };
        state.votes.push(vote.clone());
        state.users[index].0.has_voted = true;
        Ok(CastOutcome::Recorded(vote))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<CastVote>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .votes
            .iter()
            .find(|v| v.user_id == user_id)
            .and_then(|v| {
                let candidate = state.candidates.iter().find(|c| c.id == v.candidate_id)?;
                Some(CastVote {
                    candidate: candidate.clone(),
                    cast_at: v.created_at,
                })
            }))
    }

    async fn tally(&self) -> RepoResult<Tally> {
        let state = self.state.lock().unwrap();
        let rows = state
            .candidates
            .iter()
            .map(|c| CandidateTally {
                candidate: c.clone(),
                votes: state.votes.iter().filter(|v| v.candidate_id == c.id).count() as i64,
            })
            .collect();
        Ok(Tally::from_counts(rows))
    }

    async fn count_for_user(&self, user_id: UserId) -> RepoResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state.votes.iter().filter(|v| v.user_id == user_id).count() as i64)
    }
}

/// Build a context over the in-memory store
///
/// The pool is lazy and never connects; services under test do not touch it.
pub(crate) fn test_context(store: &Arc<InMemoryStore>) -> ServiceContext {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/voting_test")
        .unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(store.clone())
        .candidate_repo(store.clone())
        .vote_repo(store.clone())
        .session_service(Arc::new(SessionService::new("test-secret", 3600)))
        .build()
        .unwrap()
}
