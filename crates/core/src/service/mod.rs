//! Service layer enforcing the user business rules on top of a repository.

mod error;
mod http_mapping;
mod users;

pub use error::{Result, ServiceError};
pub use http_mapping::service_error_to_status_code;
pub use users::UserService;
