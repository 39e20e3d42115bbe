//! Error types for stackview-core

use crate::StackKey;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] stackview_config::ConfigError),

    #[error("Service '{service}' not found in stack '{stack}'")]
    ServiceNotFound { stack: String, service: String },

    #[error("Stack not found: {0}")]
    StackNotFound(StackKey),

    #[error("Invalid stack snapshot at {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether this error means "the service is gone" (the caller should redirect)
    pub fn is_service_not_found(&self) -> bool {
        matches!(self, CoreError::ServiceNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
