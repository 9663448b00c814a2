pub mod error;
pub mod health;
pub mod pages;
pub mod users;

pub use error::AppError;
