use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Backend implementations translate their native errors into these variants
/// so callers never depend on a particular store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A conditional write was rejected because its precondition did not hold.
    #[error("{entity_type} condition check failed: {id}")]
    ConditionFailed {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Schema creation failed: {0}")]
    SchemaFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
