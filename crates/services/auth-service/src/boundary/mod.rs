//! Input and output ports of the login use case.

use common::AppResult;
use domain::{AuthenticationRequest, AuthenticationResult};

use crate::service::LoginOutcome;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entry point callers use to run a login.
pub trait LoginInputBoundary: Send + Sync {
    /// Run one login attempt. Rejections are reported, not returned as `Err`.
    fn execute(&self, request: AuthenticationRequest) -> AppResult<LoginOutcome>;
}

/// Receives the result of a login attempt.
///
/// Exactly one method is called per attempt that does not fault.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait LoginOutputBoundary: Send + Sync {
    /// Called when the credentials matched
    fn prepare_success_view(&self, result: AuthenticationResult);

    /// Called with a user-facing message when the login was turned down
    fn prepare_fail_view(&self, error: String);
}
