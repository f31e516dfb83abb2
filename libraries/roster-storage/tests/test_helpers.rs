//! Test helpers for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory):
//! an in-memory database is private to one connection, so a pool would see
//! several unrelated databases.

use roster_core::UserStore;
use roster_storage::SqliteUserStore;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub store: SqliteUserStore,
    pub url: String,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new initialized test database
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let url = format!("sqlite://{}", db_path.display());

        let store = SqliteUserStore::connect(&url, 5)
            .await
            .expect("Failed to open store");
        store.initialize().await.expect("Failed to initialize store");

        Self {
            store,
            url,
            _temp_dir: temp_dir,
        }
    }
}
