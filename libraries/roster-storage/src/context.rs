use crate::{create_pool, users};
use async_trait::async_trait;
use roster_core::{
    error::Result,
    store::UserStore,
    types::{NewUser, User, UserId},
};
use sqlx::SqlitePool;

/// Record store backed by a `SQLite` pool
///
/// Each operation checks a connection out of the pool and returns it when
/// the query finishes, on success and error paths alike.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url`
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = create_pool(database_url, max_connections).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn initialize(&self) -> Result<()> {
        crate::initialize(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn insert(&self, user: &NewUser) -> Result<UserId> {
        Ok(users::create(&self.pool, user).await?)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<bool> {
        Ok(users::delete(&self.pool, id).await?)
    }
}
