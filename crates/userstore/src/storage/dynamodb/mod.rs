//! DynamoDB storage backend implementation.
//!
//! Users live in a single table whose only key is the `id` partition key.

mod client;
mod conversions;
mod error;
mod expressions;
mod repository;

pub use client::{create_client, target_display};
pub use repository::DynamoDbRepository;
