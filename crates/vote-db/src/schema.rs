//! Schema bootstrap
//!
//! The DDL is embedded at compile time and applied on every start. Each
//! statement is `IF NOT EXISTS`, and the script takes a transaction-scoped
//! advisory lock first so concurrent starts do not race on the catalog.

use sqlx::PgPool;
use tracing::{info, instrument};

/// Embedded schema DDL
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_init.sql");

/// Create the `users`, `candidates` and `votes` tables if they are missing
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
