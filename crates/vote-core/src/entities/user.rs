//! User entity - a registered voter

use chrono::{DateTime, Utc};

use crate::value_objects::{Handle, UserId};

/// User entity representing a registered voter account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub handle: Handle,
    pub display_name: String,
    pub email: Option<String>,
    /// Flips to `true` once, when the user's vote is recorded
    pub has_voted: bool,
    pub created_at: DateTime<Utc>,
}

/// Data needed to insert a new user row
///
/// The id and timestamps are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub handle: Handle,
    pub display_name: String,
    pub email: Option<String>,
}

impl NewUser {
    /// Create a new user record, normalizing a blank email to `None`
    pub fn new(handle: Handle, display_name: String, email: Option<String>) -> Self {
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Self {
            handle,
            display_name: display_name.trim().to_string(),
            email,
        }
    }
}
