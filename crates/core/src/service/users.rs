use std::sync::Arc;

use crate::storage::UserRepository;
use crate::user::{CreateUser, UpdateUser, User};

use super::{Result, ServiceError};

/// Business operations on users.
///
/// Validation runs before any repository call, so a rejected request never
/// touches the store.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Makes sure the backing collection exists.
    pub async fn ensure_schema(&self) -> Result<()> {
        Ok(self.repo.ensure_schema().await?)
    }

    /// Validates the request, assigns identity and creation time, and persists the user.
    pub async fn create(&self, input: CreateUser) -> Result<User> {
        input.validate()?;

        let user = User::new(input.name, input.email);
        self.repo.create_user(&user).await?;

        Ok(user)
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.repo
            .get_user(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() })
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        Ok(self.repo.list_users().await?)
    }

    /// Replaces name and email of an existing user.
    ///
    /// A missing user surfaces as the repository's conditional failure.
    pub async fn update(&self, id: &str, input: UpdateUser) -> Result<()> {
        input.validate()?;
        Ok(self.repo.update_user(id, &input).await?)
    }

    /// Deletes a user. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        Ok(self.repo.delete_user(id).await?)
    }
}
