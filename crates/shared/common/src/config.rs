//! Shared configuration structures.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// How login outcomes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!("unknown output format '{}'", other))),
        }
    }
}

/// Login runner configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Optional JSON file of users to seed the directory with
    pub users_file: Option<PathBuf>,
    /// Output rendering
    pub output: OutputFormat,
}

impl LoginConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output = match lookup("LOGIN_OUTPUT") {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            log_level: lookup("LOGIN_LOG_LEVEL").unwrap_or(defaults.log_level),
            users_file: lookup("LOGIN_USERS_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            output,
        })
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            users_file: None,
            output: OutputFormat::Text,
        }
    }
}
