//! Value objects - immutable types that represent domain concepts

mod handle;
mod ids;

pub use handle::Handle;
pub use ids::{CandidateId, IdParseError, UserId, VoteId};
