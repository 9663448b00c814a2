use super::ServiceError;
use crate::storage::repository_error_to_status_code;

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Repository` -> delegated to [`repository_error_to_status_code`]
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::InvalidInput(_) => 400,
        ServiceError::NotFound { .. } => 404,
        ServiceError::Repository(err) => repository_error_to_status_code(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RepositoryError;
    use crate::user::UserError;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let error = ServiceError::InvalidInput(UserError::EmptyEmail);
        assert_eq!(service_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ServiceError::NotFound {
            id: "user-1".to_string(),
        };
        assert_eq!(service_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_repository_errors_map_to_500() {
        let error = ServiceError::Repository(RepositoryError::ConditionFailed {
            entity_type: "User",
            id: "user-1".to_string(),
        });
        assert_eq!(service_error_to_status_code(&error), 500);
    }
}
