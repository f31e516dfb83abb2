/// User domain type
use crate::error::{Result, RosterError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
pub type UserId = i64;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, never reused
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Creation timestamp (UTC), set by the store
    pub created_at: NaiveDateTime,
}

/// Validated input for creating a user
///
/// Both fields are guaranteed non-empty. No other checks are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate the fields of a new user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() || email.is_empty() {
            return Err(RosterError::validation("name and email are required"));
        }

        Ok(Self { name, email })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }
}
