//! Domain-level errors.
//!
//! These represent the expected ways a login can be turned down. They are
//! reported to the output boundary as messages, not returned as faults.

use thiserror::Error;

/// Reasons a login request is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record is stored under the username
    #[error("{0}: Account does not exist.")]
    AccountNotFound(String),

    /// The record exists but the password differs
    #[error("Incorrect password for \"{0}\".")]
    PasswordMismatch(String),
}

impl DomainError {
    /// Create an account-not-found rejection
    pub fn account_not_found(username: impl Into<String>) -> Self {
        DomainError::AccountNotFound(username.into())
    }

    /// Create a password-mismatch rejection
    pub fn password_mismatch(username: impl Into<String>) -> Self {
        DomainError::PasswordMismatch(username.into())
    }

    /// Username the rejection refers to
    pub fn username(&self) -> &str {
        match self {
            DomainError::AccountNotFound(name) | DomainError::PasswordMismatch(name) => name,
        }
    }
}
