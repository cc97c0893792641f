//! Loading user records into a directory.

use std::fs;
use std::path::Path;

use tracing::info;

use common::{AppError, AppResult};
use domain::{UserFactory, UserRecord, CREDENTIAL_SEPARATOR};

use crate::repository::UserDirectory;

/// Parse a `NAME:PASS` pair. The first separator splits; the password may
/// itself contain separators.
pub fn parse_credential_pair(pair: &str, factory: &dyn UserFactory) -> AppResult<UserRecord> {
    let (username, password) = pair.split_once(CREDENTIAL_SEPARATOR).ok_or_else(|| {
        AppError::validation(format!(
            "expected NAME{}PASS, got '{}'",
            CREDENTIAL_SEPARATOR, pair
        ))
    })?;

    if username.is_empty() {
        return Err(AppError::validation("username in credential pair is empty"));
    }

    Ok(factory.create(username, password))
}

/// Read a JSON array of `{"username", "password"}` objects.
pub fn load_users_file(path: &Path) -> AppResult<Vec<UserRecord>> {
    let raw = fs::read_to_string(path)?;
    let users: Vec<UserRecord> = serde_json::from_str(&raw)?;
    Ok(users)
}

/// Save every record into `directory`, returning how many were written.
pub fn seed_directory<I>(directory: &dyn UserDirectory, users: I) -> AppResult<usize>
where
    I: IntoIterator<Item = UserRecord>,
{
    let mut count = 0;
    for user in users {
        directory.save(user)?;
        count += 1;
    }
    info!(count, "Seeded user directory");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::CommonUserFactory;

    use super::*;
    use crate::repository::{InMemoryUserDirectory, MockUserDirectory};

    #[test]
    fn test_parse_pair() {
        let user = parse_credential_pair("Paul:password", &CommonUserFactory).unwrap();
        assert_eq!(user, UserRecord::new("Paul", "password"));
    }

    #[test]
    fn test_parse_pair_password_keeps_separators() {
        let user = parse_credential_pair("Paul:a:b:", &CommonUserFactory).unwrap();
        assert_eq!(user.password, "a:b:");
    }

    #[test]
    fn test_parse_pair_allows_empty_password() {
        let user = parse_credential_pair("Paul:", &CommonUserFactory).unwrap();
        assert_eq!(user.password, "");
    }

    #[test]
    fn test_parse_pair_rejects_missing_separator() {
        let result = parse_credential_pair("Paul", &CommonUserFactory);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_pair_rejects_empty_username() {
        let result = parse_credential_pair(":pw", &CommonUserFactory);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_load_users_file() {
        let path = std::env::temp_dir().join(format!("login-seed-{}.json", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[{{"username":"Paul","password":"pw"}},{{"username":"Anna","password":"x"}}]"#
            )
            .unwrap();
        }

        let users = load_users_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1], UserRecord::new("Anna", "x"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_users_file(Path::new("/nonexistent/login-users.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_seed_directory_counts_records() {
        let directory = InMemoryUserDirectory::new();
        let count = seed_directory(
            &directory,
            vec![UserRecord::new("Paul", "pw"), UserRecord::new("Anna", "x")],
        )
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(directory.len().unwrap(), 2);
    }

    #[test]
    fn test_seed_directory_stops_on_fault() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::internal("disk full")));

        let result = seed_directory(
            &directory,
            vec![UserRecord::new("Paul", "pw"), UserRecord::new("Anna", "x")],
        );
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
