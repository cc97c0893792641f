//! Common utilities shared across the login workspace.
//!
//! This crate provides:
//! - Unified fault handling
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
