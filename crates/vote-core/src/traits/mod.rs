//! Repository traits (ports)

mod repositories;

pub use repositories::{CandidateRepository, RepoResult, UserRepository, VoteRepository};
