//! User model -> entity mapper

use vote_core::entities::User;
use vote_core::value_objects::{Handle, UserId};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays behind; it is only read through
/// `UserRepository::get_password_hash`.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            // Stored handles passed validation on insert
            handle: Handle::from_trusted(model.handle),
            display_name: model.display_name,
            email: model.email,
            has_voted: model.has_voted,
            created_at: model.created_at,
        }
    }
}
