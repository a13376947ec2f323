//! # vote-api
//!
//! HTTP server for the voting application built with the Axum framework.
//! Pages are served as JSON view models; form posts answer with a redirect
//! and a flash message.

pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
