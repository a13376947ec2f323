//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod ballot;
pub mod context;
pub mod error;
pub mod results;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{AuthService, AuthenticatedSession};
pub use ballot::BallotService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use results::ResultsService;
