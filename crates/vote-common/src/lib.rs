//! # vote-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, verify_password, verify_password_or_absent, Session, SessionClaims,
    SessionService,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, RateLimitConfig,
    ServerConfig, SessionConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, LogFormat, TracingConfig, TracingError};
