/// User management service - request handling independent of HTTP
use roster_core::{NewUser, RosterError, User, UserId, UserStore};
use std::sync::Arc;

pub const USER_ADDED: &str = "User added successfully!";
pub const FIELDS_REQUIRED: &str = "Name and email are required!";
pub const EMAIL_EXISTS: &str = "Email already exists!";
pub const USER_DELETED: &str = "User deleted successfully!";

/// Result of submitting the add-user form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddUserOutcome {
    Added(UserId),
    MissingFields,
    DuplicateEmail,
}

impl AddUserOutcome {
    /// Notice to show on the next page
    pub fn notice(&self) -> &'static str {
        match self {
            AddUserOutcome::Added(_) => USER_ADDED,
            AddUserOutcome::MissingFields => FIELDS_REQUIRED,
            AddUserOutcome::DuplicateEmail => EMAIL_EXISTS,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, AddUserOutcome::Added(_))
    }
}

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> roster_core::Result<Vec<User>> {
        self.store.list_all().await
    }

    /// Validate and insert a user
    ///
    /// Empty fields and duplicate emails are expected outcomes, not errors;
    /// only storage failures come back as `Err`. An empty field never
    /// reaches the store.
    pub async fn add_user(&self, name: &str, email: &str) -> roster_core::Result<AddUserOutcome> {
        let new_user = match NewUser::new(name, email) {
            Ok(user) => user,
            Err(RosterError::Validation(_)) => return Ok(AddUserOutcome::MissingFields),
            Err(e) => return Err(e),
        };

        match self.store.insert(&new_user).await {
            Ok(id) => {
                tracing::info!(id, "User added");
                Ok(AddUserOutcome::Added(id))
            }
            Err(RosterError::DuplicateKey { email }) => {
                tracing::info!(%email, "Rejected duplicate email");
                Ok(AddUserOutcome::DuplicateEmail)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete a user; returns whether a record was removed
    pub async fn delete_user(&self, id: UserId) -> roster_core::Result<bool> {
        let removed = self.store.delete_by_id(id).await?;
        if removed {
            tracing::info!(id, "User deleted");
        } else {
            tracing::debug!(id, "Delete matched no user");
        }
        Ok(removed)
    }
}
