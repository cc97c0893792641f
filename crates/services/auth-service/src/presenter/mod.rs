//! Presenter that turns login outcomes into printable output.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::json;

use common::{AppError, AppResult, OutputFormat};
use domain::{AuthenticationResult, ERROR_FIELD, LOGGED_IN_PREFIX};

use crate::boundary::LoginOutputBoundary;

/// State captured from the last login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginViewModel {
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Output boundary that records into a `LoginViewModel` and renders it.
#[derive(Debug, Default)]
pub struct LoginPresenter {
    format: OutputFormat,
    view: Mutex<LoginViewModel>,
}

impl LoginPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            view: Mutex::new(LoginViewModel::default()),
        }
    }

    /// Snapshot of the captured state
    pub fn view_model(&self) -> AppResult<LoginViewModel> {
        self.view
            .lock()
            .map(|view| view.clone())
            .map_err(|_| AppError::internal("presenter lock poisoned"))
    }

    /// Render the captured state in the configured format
    pub fn render(&self) -> AppResult<String> {
        let view = self.view_model()?;

        match self.format {
            OutputFormat::Text => Ok(match (&view.username, &view.error) {
                (_, Some(error)) => error.clone(),
                (Some(username), None) => format!("{}{}", LOGGED_IN_PREFIX, username),
                (None, None) => String::new(),
            }),
            OutputFormat::Json => {
                let value = match view.error {
                    Some(error) => json!({ ERROR_FIELD: error }),
                    None => serde_json::to_value(&view)?,
                };
                Ok(serde_json::to_string(&value)?)
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut LoginViewModel)) {
        // A poisoned lock still holds usable data; the view is overwritten anyway.
        let mut view = match self.view.lock() {
            Ok(view) => view,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(&mut view);
    }
}

impl LoginOutputBoundary for LoginPresenter {
    fn prepare_success_view(&self, result: AuthenticationResult) {
        self.update(|view| {
            view.username = Some(result.username);
            view.error = None;
        });
    }

    fn prepare_fail_view(&self, error: String) {
        self.update(|view| {
            view.username = None;
            view.error = Some(error);
        });
    }
}
