//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `userstore_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use userstore_core::storage::RepositoryError;

/// Map failures that never reached DynamoDB to `ConnectionFailed`.
///
/// Returns `None` for errors that carry a service response.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {}", DisplayErrorContext(err))),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {}", DisplayErrorContext(err))),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed `attribute_exists` guard becomes `ConditionFailed`.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => RepositoryError::ConditionFailed {
            entity_type,
            id: id.into(),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => {
            RepositoryError::QueryFailed(format!("UpdateItem failed: {}", DisplayErrorContext(err)))
        }
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => {
            RepositoryError::QueryFailed(format!("DeleteItem failed: {}", DisplayErrorContext(err)))
        }
    }
}

/// Map a CreateTable SDK error, treating an already existing table as success.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> Result<(), RepositoryError> {
    if let Some(mapped) = map_transport_error(&err) {
        return Err(mapped);
    }
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => Ok(()),
        CreateTableError::LimitExceededException(_) => Err(RepositoryError::SchemaFailed(
            "Table limit exceeded".to_string(),
        )),
        err => Err(RepositoryError::SchemaFailed(format!(
            "CreateTable failed: {}",
            DisplayErrorContext(err)
        ))),
    }
}

/// Map a request builder error (missing required field) to RepositoryError.
pub fn map_build_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::SchemaFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::config::http::HttpResponse;
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceInUseException,
    };

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<ScanError, HttpResponse> = SdkError::timeout_error("deadline elapsed");

        assert!(matches!(
            map_scan_error(err),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_unhandled_get_error_is_query_failure() {
        let err: SdkError<GetItemError, HttpResponse> =
            SdkError::construction_failure("missing table name");

        assert!(matches!(
            map_get_item_error(err),
            RepositoryError::QueryFailed(msg) if msg.starts_with("GetItem failed")
        ));
    }

    #[test]
    fn test_unhandled_update_error_is_not_a_condition_failure() {
        let err: SdkError<UpdateItemError, HttpResponse> =
            SdkError::construction_failure("missing key");

        assert!(matches!(
            map_update_item_error(err, "User", "abc"),
            RepositoryError::QueryFailed(_)
        ));
    }

    #[test]
    fn test_unhandled_create_table_error_is_schema_failure() {
        let err: SdkError<CreateTableError, HttpResponse> =
            SdkError::construction_failure("missing key schema");

        assert!(matches!(
            map_create_table_error(err),
            Err(RepositoryError::SchemaFailed(_))
        ));
    }

    #[test]
    fn test_failed_update_condition_is_condition_failure() {
        let exception = ConditionalCheckFailedException::builder()
            .message("The conditional request failed")
            .build();
        let err: SdkError<UpdateItemError, ()> = SdkError::service_error(
            UpdateItemError::ConditionalCheckFailedException(exception),
            (),
        );

        match map_update_item_error(err, "User", "abc") {
            RepositoryError::ConditionFailed { entity_type, id } => {
                assert_eq!(entity_type, "User");
                assert_eq!(id, "abc");
            }
            other => panic!("expected ConditionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_table_is_success() {
        let exception = ResourceInUseException::builder()
            .message("Table already exists: Users")
            .build();
        let err: SdkError<CreateTableError, ()> =
            SdkError::service_error(CreateTableError::ResourceInUseException(exception), ());

        assert!(map_create_table_error(err).is_ok());
    }
}
