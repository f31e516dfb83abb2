//! Roster Storage
//!
//! `SQLite` record store for Roster.
//!
//! The store owns a single `users` table. Identifiers and creation timestamps
//! are assigned by `SQLite`, and email uniqueness is enforced by the table's
//! `UNIQUE` constraint, so a colliding insert is rejected atomically even
//! when several writers race.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{NewUser, UserStore};
//! use roster_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::connect("sqlite://users.db", 5).await?;
//! store.initialize().await?;
//!
//! let id = store.insert(&NewUser::new("Alice", "alice@example.com")?).await?;
//! let users = store.list_all().await?;
//! assert_eq!(users[0].id, id);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Embedded schema, applied in order by [`initialize`]
const MIGRATIONS: &[&str] = &[include_str!("../migrations/0001_create_users.sql")];

/// Create the schema if it does not exist yet
///
/// Every statement is idempotent, so this runs on each start.
///
/// # Errors
///
/// Returns an error if the database cannot be written
pub async fn initialize(pool: &SqlitePool) -> Result<(), StorageError> {
    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    tracing::debug!("Schema initialized");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://users.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the database cannot be opened
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // Concurrent writers wait for the lock instead of failing
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("Pool created");

    Ok(pool)
}
