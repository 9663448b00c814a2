//! Storage backend implementations.
//!
//! Concrete implementations of `userstore_core::storage::UserRepository`.
//! The backend is chosen at startup from [`Config::store_mode`].

pub mod dynamodb;
pub mod inmemory;

use std::sync::Arc;

use userstore_core::storage::UserRepository;

use crate::config::{Config, StoreMode};

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;

/// Builds the repository selected by the configuration.
pub async fn build_repository(config: &Config) -> Arc<dyn UserRepository> {
    tracing::info!(
        mode = %config.store_mode,
        target = %dynamodb::target_display(config),
        table = %config.table_name,
        "Configuring user store"
    );

    match config.store_mode {
        StoreMode::Memory => Arc::new(InMemoryRepository::new()),
        StoreMode::Local | StoreMode::Aws => {
            let client = dynamodb::create_client(config).await;
            Arc::new(DynamoDbRepository::new(client, config.table_name.clone()))
        }
    }
}
