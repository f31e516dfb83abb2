/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required field was missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// The email is already taken by another record
    #[error("Duplicate email: {email}")]
    DuplicateKey {
        /// The colliding email value
        email: String,
    },

    /// The storage medium could not be opened or reached
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Any other storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RosterError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate key error
    pub fn duplicate(email: impl Into<String>) -> Self {
        Self::DuplicateKey {
            email: email.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for conditions caused by the caller's input rather than the store
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(RosterError::validation("empty").is_user_error());
        assert!(RosterError::duplicate("a@example.com").is_user_error());
        assert!(!RosterError::storage("disk").is_user_error());
        assert!(!RosterError::StorageUnavailable("gone".into()).is_user_error());
    }

    #[test]
    fn test_display() {
        let err = RosterError::duplicate("a@example.com");
        assert_eq!(err.to_string(), "Duplicate email: a@example.com");
    }
}
