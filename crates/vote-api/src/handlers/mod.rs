//! Route handlers
//!
//! Page handlers return a JSON view model; form handlers always answer with a
//! redirect and a flash message.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod results;
pub mod vote;
