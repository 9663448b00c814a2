use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user of the system.
///
/// `id` and `created_at` are assigned once by [`User::new`] and never change.
/// Only `name` and `email` are replaced by updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Creation instant, second precision, serialized as RFC 3339.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated id and the current time.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now().trunc_subsecs(0),
        }
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets a specific creation time for this user (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Replaces the mutable fields with the ones from an update request.
    pub fn apply(&mut self, update: &UpdateUser) {
        self.name = update.name.clone();
        self.email = update.email.clone();
    }
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// Request payload for replacing a user's name and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_uuid_id() {
        let user = User::new("Ana", "ana@x.com");

        assert!(Uuid::parse_str(&user.id).is_ok());
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
    }

    #[test]
    fn test_new_user_timestamp_has_no_subseconds() {
        let user = User::new("Ana", "ana@x.com");

        assert_eq!(user.created_at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("Ana", "ana@x.com");
        let b = User::new("Ana", "ana@x.com");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_replaces_name_and_email_only() {
        let mut user = User::new("Ana", "ana@x.com").with_id("fixed-id");
        let created_at = user.created_at;

        user.apply(&UpdateUser {
            name: "Ana B".to_string(),
            email: "anab@x.com".to_string(),
        });

        assert_eq!(user.id, "fixed-id");
        assert_eq!(user.name, "Ana B");
        assert_eq!(user.email, "anab@x.com");
        assert_eq!(user.created_at, created_at);
    }

    #[test]
    fn test_user_json_shape() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let user = User::new("Ana", "ana@x.com")
            .with_id("abc-123")
            .with_created_at(created_at);

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "abc-123");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["created_at"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_create_user_requires_both_fields() {
        let result: Result<CreateUser, _> = serde_json::from_str(r#"{"name": "Ana"}"#);
        assert!(result.is_err());
    }
}
