/// Shared application state
use crate::{config::StorageSettings, services::UserService};
use roster_core::UserStore;
use roster_storage::SqliteUserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            users: Arc::new(UserService::new(store)),
        }
    }

    /// Open and initialize the configured store
    ///
    /// Fails if the storage medium is inaccessible; callers treat that as
    /// fatal at startup.
    pub async fn connect(storage: &StorageSettings) -> roster_core::Result<Self> {
        let store =
            SqliteUserStore::connect(&storage.database_url, storage.max_connections).await?;
        store.initialize().await?;
        tracing::info!("Database ready at {}", storage.database_url);

        Ok(Self::new(Arc::new(store)))
    }
}
