//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CandidateId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Candidate not found: {0}")]
    CandidateNotFound(CandidateId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("User ID must be between {min}-{max} characters")]
    InvalidHandle { min: usize, max: usize },

    #[error("Passwords do not match!")]
    PasswordMismatch,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User ID already taken!")]
    HandleTaken,

    // =========================================================================
    // Integrity Violations
    // =========================================================================
    #[error("Vote record missing for user {0}")]
    VoteRecordMissing(UserId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CandidateNotFound(_) => "UNKNOWN_CANDIDATE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidHandle { .. } => "INVALID_HANDLE",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",

            // Conflict
            Self::HandleTaken => "HANDLE_TAKEN",

            // Integrity
            Self::VoteRecordMissing(_) => "VOTE_RECORD_MISSING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::CandidateNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidHandle { .. } | Self::PasswordMismatch
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::HandleTaken)
    }
}
