use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use userstore_core::service::{service_error_to_status_code, ServiceError};
use userstore_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error that wraps `anyhow::Error`.
///
/// The status code is derived from the wrapped error: service and repository
/// errors use the core mappings, a rejected JSON body is a 400, and anything
/// else is a 500. The body is always `{"error": "<message>"}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            service_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if self.0.downcast_ref::<JsonRejection>().is_some() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userstore_core::user::UserError;

    #[test]
    fn test_service_errors_use_core_mapping() {
        let invalid = AppError::from(ServiceError::InvalidInput(UserError::EmptyName));
        let missing = AppError::from(ServiceError::NotFound {
            id: "abc".to_string(),
        });

        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_errors_are_internal() {
        let err = AppError::from(RepositoryError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
