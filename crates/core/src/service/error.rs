use thiserror::Error;

use crate::storage::RepositoryError;
use crate::user::UserError;

/// Errors returned by [`UserService`](super::UserService).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was rejected before reaching the repository.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UserError),
    #[error("User not found: {id}")]
    NotFound { id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = ServiceError::from(UserError::EmptyName);
        assert_eq!(error.to_string(), "Invalid input: User name cannot be empty");
    }

    #[test]
    fn test_not_found_display() {
        let error = ServiceError::NotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "User not found: abc-123");
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let error = ServiceError::from(RepositoryError::QueryFailed("boom".to_string()));
        assert_eq!(error.to_string(), "Query failed: boom");
    }
}
