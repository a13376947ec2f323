//! Voting API Server entry point
//!
//! Run with:
//! ```bash
//! SECRET_KEY=change-me cargo run -p vote-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use tracing::{error, info};
use vote_common::{try_init_tracing, AppConfig, TracingConfig};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is loaded first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing(TracingConfig::default());
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting voting server..."
    );

    // Run the server
    if let Err(e) = vote_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
