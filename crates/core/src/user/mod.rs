mod error;
mod operations;
mod types;

pub use error::UserError;
pub use operations::validate_user_fields;
pub use types::{CreateUser, UpdateUser, User};
