//! Database models - SQLx-compatible structs for PostgreSQL tables

mod candidate;
mod user;
mod vote;

pub use candidate::{CandidateModel, CandidateTallyModel};
pub use user::UserModel;
pub use vote::{CastVoteModel, VoteModel};
