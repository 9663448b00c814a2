//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! `User` domain type. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use userstore_core::storage::RepositoryError;
use userstore_core::user::User;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key attribute, the only key of the table.
pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_CREATED_AT: &str = "created_at";

pub const ENTITY_TYPE_USER: &str = "User";

// ============================================================================
// User conversions
// ============================================================================

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(user.id.clone()));
    item.insert(ATTR_NAME.to_string(), AttributeValue::S(user.name.clone()));
    item.insert(ATTR_EMAIL.to_string(), AttributeValue::S(user.email.clone()));
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(format_datetime(&user.created_at)),
    );

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        id: get_string(item, ATTR_ID)?,
        name: get_string(item, ATTR_NAME)?,
        email: get_string(item, ATTR_EMAIL)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
    })
}

/// Build the primary key attribute value for a user ID.
pub fn user_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

// ============================================================================
// Helper functions
// ============================================================================

/// Format a datetime as RFC 3339, keeping sub-second digits only when present.
fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("Invalid datetime {}: {}", key, e)))
}
