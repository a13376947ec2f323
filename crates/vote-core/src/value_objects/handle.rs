//! Handle - the unique login identifier a user registers with

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Validated login handle
///
/// Surrounding whitespace is stripped and the remaining text must be
/// between [`Handle::MIN_LEN`] and [`Handle::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub const MIN_LEN: usize = 4;
    pub const MAX_LEN: usize = 20;

    /// Parse and validate a raw handle
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::InvalidHandle {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(DomainError::ValidationError(
                "User ID must not contain control characters".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wrap a handle that was already validated (e.g. read back from the database)
    pub fn from_trusted(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
