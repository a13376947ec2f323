//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in vote-core.
//! Each repository handles database operations for a specific domain entity.

mod candidate;
mod error;
mod user;
mod vote;

pub use candidate::PgCandidateRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
