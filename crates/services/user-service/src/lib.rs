//! User Service Library
//!
//! Storage of user records for the login use case, plus the single
//! "current user" marker set by a successful login.

pub mod repository;
pub mod seed;

pub use repository::{InMemoryUserDirectory, UserDirectory};
pub use seed::{load_users_file, parse_credential_pair, seed_directory};
