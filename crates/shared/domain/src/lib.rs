//! Domain layer - Core login entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the directory and the login use case.

pub mod constants;
pub mod error;
pub mod login;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use login::{AuthenticationRequest, AuthenticationResult};
pub use user::{CommonUserFactory, UserFactory, UserRecord};
