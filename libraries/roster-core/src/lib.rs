//! Roster Core
//!
//! Storage-agnostic types, the store trait, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`
//! - **Core Traits**: `UserStore`, implemented by `roster-storage`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{NewUser, RosterError};
//!
//! let user = NewUser::new("Alice", "alice@example.com").unwrap();
//! assert_eq!(user.email(), "alice@example.com");
//!
//! // Both fields are required
//! assert!(matches!(
//!     NewUser::new("", "alice@example.com"),
//!     Err(RosterError::Validation(_))
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{NewUser, User, UserId};
