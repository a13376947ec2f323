//! Request DTOs for form submissions
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field aliases accept the legacy form names (`userid`, `username`).

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// Account registration form
///
/// Handle length is checked by `Handle::parse` after trimming, and the
/// confirmation is compared by the service, so both rules report the same
/// messages whether the form arrives through HTTP or a direct call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(alias = "userid")]
    pub handle: String,

    #[serde(alias = "username")]
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub display_name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    pub confirm_password: String,
}

/// Login form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(alias = "userid")]
    #[validate(length(min = 1, message = "User ID is required"))]
    pub handle: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("Name is required")));
    }
    Ok(())
}

/// Treat an empty or whitespace-only form field as absent
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}
