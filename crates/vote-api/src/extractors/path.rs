//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use vote_core::value_objects::CandidateId;

use crate::response::ApiError;

/// Candidate id from the `/vote/:candidate_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct CandidatePath(pub CandidateId);

#[async_trait]
impl<S> FromRequestParts<S> for CandidatePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        raw.parse::<CandidateId>()
            .map(CandidatePath)
            .map_err(|_| ApiError::invalid_path("Invalid candidate_id format"))
    }
}
