//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! The configuration is built once at startup and passed by reference afterwards.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
///
/// `url` wins when set; otherwise the connection is assembled from the
/// individual host/user/password/name settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish_non_exhaustive()
    }
}

/// Session cookie configuration
#[derive(Clone)]
pub struct SessionConfig {
    /// Secret used to sign session tokens. Never defaulted.
    pub secret: String,
    /// Session lifetime in seconds
    pub ttl_seconds: i64,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("cookie_secure", &self.cookie_secure)
            .finish_non_exhaustive()
    }
}

/// Rate limiting configuration
///
/// One bucket shared by every client: `burst` requests up front, refilled at
/// `requests_per_second`. Both are at least 1.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

impl RateLimitConfig {
    /// Time for the bucket to regain one request
    #[must_use]
    pub fn replenish_period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.requests_per_second.max(1)))
    }
}

// Default value functions
fn default_app_name() -> String {
    "voting-app".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "voting_app".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_session_ttl() -> i64 {
    86400 // 1 day
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `SECRET_KEY` is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if `SECRET_KEY` is missing or a value cannot be parsed
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            None => default_env(),
            Some(s) => match s.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
            },
        };

        let secret = lookup("SECRET_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingVar("SECRET_KEY"))?;

        let ttl_seconds = parse_or(&lookup, "SESSION_TTL_SECONDS", default_session_ttl)?;
        if ttl_seconds <= 0 {
            return Err(ConfigError::InvalidValue(
                "SESSION_TTL_SECONDS",
                ttl_seconds.to_string(),
            ));
        }

        let requests_per_second = parse_or(
            &lookup,
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            default_requests_per_second,
        )?;
        let burst = parse_or(&lookup, "RATE_LIMIT_BURST", default_burst)?;
        for (key, value) in [
            ("RATE_LIMIT_REQUESTS_PER_SECOND", requests_per_second),
            ("RATE_LIMIT_BURST", burst),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue(key, value.to_string()));
            }
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
                host: lookup("DB_HOST").unwrap_or_else(default_db_host),
                port: parse_or(&lookup, "DB_PORT", default_db_port)?,
                user: lookup("DB_USER").unwrap_or_else(default_db_user),
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                name: lookup("DB_NAME").unwrap_or_else(default_db_name),
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
            },
            session: SessionConfig {
                secret,
                ttl_seconds,
                cookie_secure: parse_or(&lookup, "SESSION_COOKIE_SECURE", || {
                    env.is_production()
                })?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second,
                burst,
            },
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_or<F, T>(lookup: &F, key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
