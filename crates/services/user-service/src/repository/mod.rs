//! Repository layer for user records and the current-session marker.

mod user_directory;

pub use user_directory::{InMemoryUserDirectory, UserDirectory};

#[cfg(any(test, feature = "test-utils"))]
pub use user_directory::MockUserDirectory;
