use super::error::UserError;
use super::types::{CreateUser, UpdateUser};

/// Validates the user-supplied fields shared by create and update requests.
///
/// Both fields must contain something other than whitespace. The values
/// themselves are kept as sent.
pub fn validate_user_fields(name: &str, email: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(UserError::EmptyEmail);
    }
    Ok(())
}

impl CreateUser {
    /// Validates the request before any user is built from it.
    pub fn validate(&self) -> Result<(), UserError> {
        validate_user_fields(&self.name, &self.email)
    }
}

impl UpdateUser {
    /// Validates the request before it is applied to a stored user.
    pub fn validate(&self) -> Result<(), UserError> {
        validate_user_fields(&self.name, &self.email)
    }
}
