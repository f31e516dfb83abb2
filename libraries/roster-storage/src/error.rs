/// Storage-specific errors
use roster_core::RosterError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database could not be opened
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Schema could not be created
    #[error("Migration error: {0}")]
    Migration(String),

    /// Insert hit the email uniqueness constraint
    #[error("Email already exists: {email}")]
    Duplicate { email: String },

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { email } => RosterError::DuplicateKey { email },
            StorageError::Connection(msg) | StorageError::Migration(msg) => {
                RosterError::StorageUnavailable(msg)
            }
            StorageError::Database(
                e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)),
            ) => RosterError::StorageUnavailable(e.to_string()),
            StorageError::Database(e) => RosterError::storage(e.to_string()),
        }
    }
}
