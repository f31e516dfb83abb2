//! Record store trait

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Persistence for user records
///
/// The store owns every record. It assigns identifiers and creation
/// timestamps, and enforces email uniqueness itself: a colliding insert
/// fails with [`RosterError::DuplicateKey`](crate::RosterError::DuplicateKey)
/// and leaves nothing behind, even when racing other inserts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Ensure the backing table exists. Safe to call on every start.
    async fn initialize(&self) -> Result<()>;

    /// All records, most recently created first
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Persist a new record and return its identifier
    async fn insert(&self, user: &NewUser) -> Result<UserId>;

    /// Remove the record with this id.
    ///
    /// Deleting an id that does not exist is not an error; the returned flag
    /// tells whether a record was actually removed.
    async fn delete_by_id(&self, id: UserId) -> Result<bool>;
}
