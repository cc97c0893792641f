//! Domain-level constants.
//!
//! Failure wording lives on `DomainError`; these cover the rest.

// =============================================================================
// Presentation
// =============================================================================

/// Greeting rendered by text presenters on success
pub const LOGGED_IN_PREFIX: &str = "Logged in as ";

/// JSON key carrying a failure message
pub const ERROR_FIELD: &str = "error";

// =============================================================================
// Seeding
// =============================================================================

/// Separator between username and password in `NAME:PASS` pairs
pub const CREDENTIAL_SEPARATOR: char = ':';
