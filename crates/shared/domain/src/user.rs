//! User record entity and its factory.

use serde::{Deserialize, Serialize};

/// One registered account.
///
/// Usernames are kept unique by the directory that stores the record,
/// not by the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl UserRecord {
    /// Create a new record
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Factory for user records, so callers do not depend on the concrete type.
pub trait UserFactory: Send + Sync {
    /// Build a record from a name and password
    fn create(&self, username: &str, password: &str) -> UserRecord;
}

/// Default factory producing plain `UserRecord`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonUserFactory;

impl UserFactory for CommonUserFactory {
    fn create(&self, username: &str, password: &str) -> UserRecord {
        UserRecord::new(username, password)
    }
}
