//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and reading the redirect and flash cookies the pages answer with.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vote_api::create_app;
use vote_api::extractors::SESSION_COOKIE;
use vote_api::flash::{self, FLASH_COOKIE};
use vote_api::server::{connect_database, create_state_with_pool};
use vote_common::{AppConfig, SessionService};
use vote_db::PgPool;
use vote_service::Flash;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Connect and bootstrap the schema, keeping a pool for seeding
        let pool = connect_database(&config).await?;
        let state = create_state_with_pool(pool.clone(), config)?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        Ok(Self {
            addr: actual_addr,
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A fresh browser: its own cookie jar, redirects left to the caller
    pub fn browser(&self) -> Result<Browser> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .redirect(Policy::none())
            .build()?;

        Ok(Browser {
            base_url: self.base_url(),
            client,
        })
    }
}

/// One visitor's view of the site
pub struct Browser {
    base_url: String,
    client: Client,
}

impl Browser {
    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with a url-encoded form body
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.post(&url).form(fields).send().await?)
    }

    /// Make a POST request with no body
    pub async fn post(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.post(&url).send().await?)
    }
}

/// Secret every test server signs its cookies with
pub const TEST_SECRET: &str = "integration-test-secret";

/// Create a test configuration
///
/// Reads the database settings from the environment and pins everything
/// else so runs do not depend on the developer's shell.
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_source(|key| match key {
        "SECRET_KEY" => Some(TEST_SECRET.to_string()),
        "SESSION_COOKIE_SECURE" => Some("false".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" | "RATE_LIMIT_BURST" => Some("10000".to_string()),
        "APP_ENV" => Some("development".to_string()),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert a redirect to `expected` and return the flash it queued
pub fn assert_redirect(response: &Response, expected: &str) -> Result<Option<Flash>> {
    if response.status() != StatusCode::SEE_OTHER {
        anyhow::bail!("Expected 303 redirect, got {}", response.status());
    }

    let location = location(response).unwrap_or_default();
    if location != expected {
        anyhow::bail!("Expected redirect to {}, got {}", expected, location);
    }

    Ok(flash_of(response))
}

/// Value of the Location header
pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// The flash message set by this response, if any
pub fn flash_of(response: &Response) -> Option<Flash> {
    let signer = SessionService::new(TEST_SECRET, 60);
    response
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE && !c.value().is_empty())
        .and_then(|c| flash::open(&signer, c.value()))
}

/// Whether this response hands out a non-empty session cookie
pub fn sets_session(response: &Response) -> bool {
    response
        .cookies()
        .any(|c| c.name() == SESSION_COOKIE && !c.value().is_empty())
}
