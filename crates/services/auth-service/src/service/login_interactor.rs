//! Login interactor - Decides whether a login attempt succeeds.
//!
//! SOLID (SRP): Checks credentials and reports the outcome, nothing else.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use common::AppResult;
use domain::{AuthenticationRequest, AuthenticationResult, DomainError};
use user_service_lib::UserDirectory;

use crate::boundary::{LoginInputBoundary, LoginOutputBoundary};

/// Terminal state reached by one `execute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    /// No record for the username
    NotFound,
    /// Record found, password differs
    Mismatch,
    /// Credentials matched and the current user was set
    Success,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

/// Concrete login use case backed by a user directory.
pub struct LoginInteractor {
    directory: Arc<dyn UserDirectory>,
    presenter: Arc<dyn LoginOutputBoundary>,
}

impl LoginInteractor {
    /// Create a new interactor
    pub fn new(directory: Arc<dyn UserDirectory>, presenter: Arc<dyn LoginOutputBoundary>) -> Self {
        Self {
            directory,
            presenter,
        }
    }

    fn reject(&self, rejection: DomainError) {
        warn!(username = rejection.username(), "Login rejected: {}", rejection);
        self.presenter.prepare_fail_view(rejection.to_string());
    }
}

impl LoginInputBoundary for LoginInteractor {
    fn execute(&self, request: AuthenticationRequest) -> AppResult<LoginOutcome> {
        let AuthenticationRequest { username, password } = request;
        debug!(username = %username, "Login attempt");

        let Some(user) = self.directory.find_by_username(&username)? else {
            self.reject(DomainError::account_not_found(username));
            return Ok(LoginOutcome::NotFound);
        };

        if !user.password_matches(&password) {
            self.reject(DomainError::password_mismatch(username));
            return Ok(LoginOutcome::Mismatch);
        }

        self.directory.set_current_user(&username)?;
        info!(username = %username, "Login succeeded");
        self.presenter
            .prepare_success_view(AuthenticationResult::new(username));

        Ok(LoginOutcome::Success)
    }
}
