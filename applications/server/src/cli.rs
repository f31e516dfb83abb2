//! Administrative commands behind the `roster-server` subcommands
//!
//! Each command writes its human-readable result to `out`.

use crate::services::{AddUserOutcome, UserService};
use roster_core::UserId;
use std::io::Write;

/// `add-user`: prints the same notice the web form would show
///
/// # Errors
///
/// Fails when the user was not created (empty field or taken email) as well
/// as on storage errors.
pub async fn add_user(
    users: &UserService,
    name: &str,
    email: &str,
    out: &mut impl Write,
) -> anyhow::Result<UserId> {
    let outcome = users.add_user(name, email).await?;
    writeln!(out, "{}", outcome.notice())?;

    match outcome {
        AddUserOutcome::Added(id) => Ok(id),
        _ => anyhow::bail!("user not created: {}", outcome.notice()),
    }
}

/// `list-users`: one line per user, newest first
pub async fn list_users(users: &UserService, out: &mut impl Write) -> anyhow::Result<()> {
    let users = users.list_users().await?;

    writeln!(out, "Users:")?;
    for user in users {
        writeln!(
            out,
            "  {} - {} <{}> ({})",
            user.id, user.name, user.email, user.created_at
        )?;
    }

    Ok(())
}

/// `delete-user`: returns whether a user was removed
pub async fn delete_user(
    users: &UserService,
    id: UserId,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let removed = users.delete_user(id).await?;
    if removed {
        writeln!(out, "User deleted successfully!")?;
    } else {
        writeln!(out, "No user with id {}", id)?;
    }

    Ok(removed)
}
