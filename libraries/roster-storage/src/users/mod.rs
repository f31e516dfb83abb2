//! User record queries

use crate::error::{Result, StorageError};
use chrono::NaiveDateTime;
use roster_core::types::{NewUser, User, UserId};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Get all users, newest first
///
/// `created_at` has one-second resolution, so rows created within the same
/// second are ordered by id instead.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Insert a user and return the assigned id
///
/// # Errors
///
/// Returns [`StorageError::Duplicate`] if the email is already taken; the
/// table is left untouched in that case.
pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<UserId> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(user.name())
        .bind(user.email())
        .execute(pool)
        .await;

    match result {
        Ok(done) => {
            let id = done.last_insert_rowid();
            tracing::debug!(id, "User inserted");
            Ok(id)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(StorageError::Duplicate {
            email: user.email().to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Delete a user by id
///
/// Returns `false` when no row matched; that is not an error.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count all users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
