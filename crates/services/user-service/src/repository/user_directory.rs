//! User directory with current-user tracking.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use common::{AppError, AppResult};
use domain::UserRecord;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User directory trait for dependency injection.
///
/// Lookups report a missing user as `Ok(None)`. `Err` is reserved for
/// faults in the backing store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserDirectory: Send + Sync {
    /// Find a user by username
    fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// Insert or overwrite the record stored under its username
    fn save(&self, record: UserRecord) -> AppResult<()>;

    /// Mark `username` as the logged-in user
    fn set_current_user(&self, username: &str) -> AppResult<()>;

    /// Username set by the last successful login, if any
    fn get_current_user(&self) -> AppResult<Option<String>>;

    /// Check whether a record exists for `username`
    fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username)?.is_some())
    }
}

#[derive(Debug, Default)]
struct DirectoryState {
    users: HashMap<String, UserRecord>,
    current_username: Option<String>,
}

/// Process-local implementation of UserDirectory.
///
/// There is a single current-user slot shared by every caller.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding `users`; later duplicates overwrite earlier ones
    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();

        Self {
            state: RwLock::new(DirectoryState {
                users,
                current_username: None,
            }),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.users.len())
    }

    /// Whether no records are stored
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.users.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|_| AppError::internal("user directory lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|_| AppError::internal("user directory lock poisoned"))
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let found = self.read()?.users.get(username).cloned();
        debug!(username, found = found.is_some(), "Directory lookup");
        Ok(found)
    }

    fn save(&self, record: UserRecord) -> AppResult<()> {
        let mut state = self.write()?;
        let replaced = state.users.insert(record.username.clone(), record).is_some();
        debug!(replaced, "Saved user record");
        Ok(())
    }

    fn set_current_user(&self, username: &str) -> AppResult<()> {
        self.write()?.current_username = Some(username.to_string());
        Ok(())
    }

    fn get_current_user(&self) -> AppResult<Option<String>> {
        Ok(self.read()?.current_username.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_find_missing_user_returns_none() {
        let directory = InMemoryUserDirectory::new();
        assert_eq!(directory.find_by_username("Paul").unwrap(), None);
        assert!(!directory.exists_by_username("Paul").unwrap());
    }

    #[test]
    fn test_save_then_find() {
        let directory = InMemoryUserDirectory::new();
        directory.save(UserRecord::new("Paul", "password")).unwrap();

        let user = directory.find_by_username("Paul").unwrap().unwrap();
        assert_eq!(user.password, "password");
        assert!(directory.exists_by_username("Paul").unwrap());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let directory = InMemoryUserDirectory::with_users([UserRecord::new("Paul", "pw")]);
        assert!(directory.find_by_username("paul").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_last_write_wins() {
        let directory = InMemoryUserDirectory::new();
        directory.save(UserRecord::new("Paul", "first")).unwrap();
        directory.save(UserRecord::new("Paul", "second")).unwrap();

        assert_eq!(directory.len().unwrap(), 1);
        let user = directory.find_by_username("Paul").unwrap().unwrap();
        assert_eq!(user.password, "second");
    }

    #[test]
    fn test_with_users_keeps_last_duplicate() {
        let directory = InMemoryUserDirectory::with_users([
            UserRecord::new("Paul", "first"),
            UserRecord::new("Anna", "x"),
            UserRecord::new("Paul", "second"),
        ]);
        assert_eq!(directory.len().unwrap(), 2);
        assert_eq!(
            directory.find_by_username("Paul").unwrap().unwrap().password,
            "second"
        );
    }

    #[test]
    fn test_current_user_absent_initially() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty().unwrap());
        assert_eq!(directory.get_current_user().unwrap(), None);
    }

    #[test]
    fn test_set_current_user_does_not_require_record() {
        let directory = InMemoryUserDirectory::new();
        directory.set_current_user("ghost").unwrap();
        assert_eq!(directory.get_current_user().unwrap().as_deref(), Some("ghost"));
    }

    #[test]
    fn test_set_current_user_replaces_previous() {
        let directory = InMemoryUserDirectory::new();
        directory.set_current_user("Paul").unwrap();
        directory.set_current_user("Anna").unwrap();
        assert_eq!(directory.get_current_user().unwrap().as_deref(), Some("Anna"));
    }

    #[test]
    fn test_shared_through_arc_dyn() {
        let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());
        let writer = Arc::clone(&directory);
        std::thread::spawn(move || writer.save(UserRecord::new("Paul", "pw")))
            .join()
            .unwrap()
            .unwrap();
        assert!(directory.exists_by_username("Paul").unwrap());
    }
}
