//! Login request and result value objects.

use serde::{Deserialize, Serialize};

/// Credentials submitted for a login attempt. No format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticationRequest {
    pub username: String,
    pub password: String,
}

impl AuthenticationRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Delivered to the output boundary after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    /// Name of the authenticated user
    pub username: String,
}

impl AuthenticationResult {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
