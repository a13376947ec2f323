//! Axum extractors for request handling
//!
//! Custom extractors for the session cookie, validated forms, and path ids.

mod path;
mod session;
mod validated;

pub use path::CandidatePath;
pub use session::{session_cookie, CurrentVoter, MaybeVoter, SESSION_COOKIE};
pub use validated::ValidatedForm;
