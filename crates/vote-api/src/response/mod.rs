//! Response types and error handling for HTTP endpoints
//!
//! Form flows turn errors into a [`FlashRedirect`]; everything else gets a
//! JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;
use vote_common::AppError;
use vote_service::{Flash, ServiceError};

use crate::extractors::SESSION_COOKIE;
use crate::flash;

/// Message shown when the failure is on our side
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid form submission: {0}")]
    InvalidForm(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_) | Self::InvalidForm(_) | Self::InvalidPath(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
        }
    }

    /// Text safe to show the user
    ///
    /// Server-side failures collapse to a generic message; the detail is logged.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.status_code().is_server_error() {
            return GENERIC_FAILURE.to_string();
        }

        match self {
            Self::Validation(errors) => first_validation_message(errors),
            Self::App(e) => e.to_string(),
            Self::Service(e) => e.to_string(),
            Self::InvalidForm(_) => "Please fill in every required field.".to_string(),
            Self::InvalidPath(_) => "That candidate does not exist.".to_string(),
        }
    }

    /// Turn the error into a redirect to `location` carrying a danger flash
    pub fn flash_to(self, location: &'static str) -> FlashRedirect {
        if self.status_code().is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        FlashRedirect::to(location, Flash::danger(self.user_message()))
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid form error
    pub fn invalid_form(msg: impl Into<String>) -> Self {
        Self::InvalidForm(msg.into())
    }
}

/// Pick one message out of a validation failure, preferring the custom text
fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, errs) in fields {
        if let Some(e) = errs.first() {
            return match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {field}"),
            };
        }
    }
    "Invalid input".to_string()
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();
        let message = self.user_message();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        // Build details for validation errors
        let details = if let Self::Validation(errors) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// `303 See Other` to `location`, leaving a flash for the next page
#[derive(Debug)]
pub struct FlashRedirect {
    location: &'static str,
    flash: Flash,
    clear_session: bool,
}

impl FlashRedirect {
    pub fn to(location: &'static str, flash: Flash) -> Self {
        Self {
            location,
            flash,
            clear_session: false,
        }
    }

    /// Also drop the session cookie
    pub fn clear_session(mut self) -> Self {
        self.clear_session = true;
        self
    }

    pub fn location(&self) -> &'static str {
        self.location
    }

    pub fn flash(&self) -> &Flash {
        &self.flash
    }
}

/// The flash rides in the response extensions until [`flash::write_pending`]
/// signs it into a cookie
impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut jar = CookieJar::new();
        if self.clear_session {
            jar = jar.add(flash::removal_cookie(SESSION_COOKIE));
        }

        let mut response = (jar, Redirect::to(self.location)).into_response();
        response.extensions_mut().insert(self.flash);
        response
    }
}
