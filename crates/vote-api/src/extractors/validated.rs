//! Validated form extractor
//!
//! Extracts and validates `application/x-www-form-urlencoded` bodies using
//! the validator crate.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated form extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
/// Handlers take `Result<ValidatedForm<T>, ApiError>` so a rejection can be
/// turned into a flash redirect instead of an error page.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract form
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_form(e.body_text()))?;

        // Validate
        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
