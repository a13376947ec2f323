//! # vote-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Candidate, CandidateTally, CastOutcome, CastVote, NewUser, Tally, User, Vote};
pub use error::DomainError;
pub use traits::{CandidateRepository, RepoResult, UserRepository, VoteRepository};
pub use value_objects::{CandidateId, Handle, IdParseError, UserId, VoteId};
