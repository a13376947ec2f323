//! # vote-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `vote-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the transactional vote cast
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vote_db::pool::{create_pool, DatabaseConfig};
//! use vote_db::{ensure_schema, PgVoteRepository};
//! use vote_core::traits::VoteRepository;
//!
//! async fn example(app_config: &vote_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from(&app_config.database);
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!
//!     let votes = PgVoteRepository::new(pool);
//!     let tally = votes.tally().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgCandidateRepository, PgUserRepository, PgVoteRepository};
pub use schema::ensure_schema;
