//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub handle: String,
    pub display_name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub has_voted: bool,
    pub created_at: DateTime<Utc>,
}
