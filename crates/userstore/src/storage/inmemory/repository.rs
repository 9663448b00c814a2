//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userstore_core::storage::{RepositoryError, Result, UserRepository};
use userstore_core::user::{UpdateUser, User};

/// In-memory storage backend.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update_user(&self, id: &str, update: &UpdateUser) -> Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| RepositoryError::ConditionFailed {
                entity_type: "User",
                id: id.to_string(),
            })?;
        user.apply(update);
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(name: &str, email: &str) -> UpdateUser {
        UpdateUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryRepository::new();
        let user = User::new("Ana", "ana@x.com");

        repo.create_user(&user).await.unwrap();

        assert_eq!(repo.get_user(&user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_user("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_overwrites_same_id() {
        let repo = InMemoryRepository::new();
        let first = User::new("Ana", "ana@x.com").with_id("same");
        let second = User::new("Bruno", "bruno@x.com").with_id("same");

        repo.create_user(&first).await.unwrap();
        repo.create_user(&second).await.unwrap();

        assert_eq!(repo.list_users().await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let repo = InMemoryRepository::new();
        let user = User::new("Ana", "ana@x.com");
        repo.create_user(&user).await.unwrap();

        repo.update_user(&user.id, &update("Ana B", "anab@x.com"))
            .await
            .unwrap();

        let stored = repo.get_user(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana B");
        assert_eq!(stored.email, "anab@x.com");
        assert_eq!(stored.created_at, user.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_user_fails_condition() {
        let repo = InMemoryRepository::new();

        let result = repo.update_user("missing", &update("Ana", "ana@x.com")).await;

        assert_eq!(
            result,
            Err(RepositoryError::ConditionFailed {
                entity_type: "User",
                id: "missing".to_string(),
            })
        );
        assert!(repo.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        let user = User::new("Ana", "ana@x.com");
        repo.create_user(&user).await.unwrap();

        repo.delete_user(&user.id).await.unwrap();
        repo.delete_user(&user.id).await.unwrap();

        assert_eq!(repo.get_user(&user.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();
        let user = User::new("Ana", "ana@x.com");

        clone.create_user(&user).await.unwrap();

        assert!(repo.get_user(&user.id).await.unwrap().is_some());
    }
}
