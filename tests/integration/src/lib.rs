//! Integration test utilities for the voting server
//!
//! This crate provides helpers for running end-to-end tests against
//! the page routes over real HTTP, with cookies kept the way a browser keeps them.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
