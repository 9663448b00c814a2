use async_trait::async_trait;

use crate::user::{UpdateUser, User};

use super::Result;

/// Repository for user persistence.
///
/// Implementations hold no request-scoped state; every method is safe to call
/// concurrently from many handlers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the backing collection keyed by `id` if it does not exist yet.
    ///
    /// An already existing collection is not an error.
    async fn ensure_schema(&self) -> Result<()>;

    /// Writes a user. An existing record with the same id is replaced.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Gets a user by ID. `None` means the user does not exist.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Lists every stored user.
    ///
    /// This reads the whole collection and is only meant for small datasets.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Replaces the name and email of an existing user.
    ///
    /// Fails with [`RepositoryError::ConditionFailed`](super::RepositoryError::ConditionFailed)
    /// when no user with this ID exists.
    async fn update_user(&self, id: &str, update: &UpdateUser) -> Result<()>;

    /// Deletes a user by ID. Deleting an absent user succeeds.
    async fn delete_user(&self, id: &str) -> Result<()>;
}
