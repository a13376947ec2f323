//! Authentication utilities

mod password;
mod session;

pub use password::{hash_password, verify_password, verify_password_or_absent};
pub use session::{Session, SessionClaims, SessionService};
