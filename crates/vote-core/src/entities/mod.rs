//! Domain entities - core business objects

mod candidate;
mod tally;
mod user;
mod vote;

pub use candidate::Candidate;
pub use tally::{CandidateTally, Tally};
pub use user::{NewUser, User};
pub use vote::{CastOutcome, CastVote, Vote};
