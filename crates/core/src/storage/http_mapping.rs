//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Every repository failure is a server-side failure from the client's point
/// of view, including a failed update precondition:
///
/// - `ConditionFailed` -> 500 (Internal Server Error)
/// - `ConnectionFailed` -> 500 (Internal Server Error)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `SchemaFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use userstore_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::QueryFailed("Table not found".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 500);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConditionFailed { .. } => 500,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::SchemaFailed(_) => 500,
    }
}
