//! Core crate for userstore.
//!
//! Holds everything that does not touch the network: the `User` domain type,
//! field validation, the repository contract with its error taxonomy, and the
//! service layer that enforces the business rules on top of a repository.

pub mod service;
pub mod storage;
pub mod user;
