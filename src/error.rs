//! Error types for did
//!
//! Exit codes:
//! - 0: Success
//! - 1: Any fatal error (bad date, unreadable or unwritable log, bad config)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the did CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Main error type for did operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date: {0} (expected YYYY/MM/DD)")]
    InvalidDate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Can't read log file {}: {source}", .path.display())]
    UnreadableLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't open file for writing: {}: {source}", .path.display())]
    UncreatableLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't open file for appending: {}: {source}", .path.display())]
    UnwritableLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    /// Short machine-readable kind, used in JSON error output
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidDate(_) => "invalid_date",
            Error::InvalidArgument(_) => "invalid_argument",
            Error::InvalidConfig(_) => "invalid_config",
            Error::UnreadableLog { .. } => "unreadable_log",
            Error::UncreatableLog { .. } => "uncreatable_log",
            Error::UnwritableLog { .. } => "unwritable_log",
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => "operation_failed",
        }
    }

    /// Structured details for JSON output, when the error carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidDate(text) => Some(serde_json::json!({ "input": text })),
            Error::UnreadableLog { path, .. }
            | Error::UncreatableLog { path, .. }
            | Error::UnwritableLog { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Error::InvalidConfig(message) => Some(serde_json::json!({ "message": message })),
            _ => None,
        }
    }
}

/// Result type alias for did operations
pub type Result<T> = std::result::Result<T, Error>;
