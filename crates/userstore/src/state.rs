//! Application state shared by all request handlers.

use std::sync::Arc;

use userstore_core::service::UserService;
use userstore_core::storage::UserRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request; everything inside is behind an `Arc`, and all
/// mutable data lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    /// Creates a new AppState on top of the given repository.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserService::new(repo),
        }
    }
}

impl Default for AppState {
    /// State backed by an empty in-memory repository.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
