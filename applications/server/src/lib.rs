//! Roster Server Library
//!
//! Web front end for the user roster: list, add and delete users, plus a
//! health probe.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod notice;
pub mod services;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::UserService;
pub use state::AppState;
