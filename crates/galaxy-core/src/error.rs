//! Error types and exit codes for galaxy
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, unknown idea, duplicate account, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for GalaxyError {
    fn from(err: rusqlite::Error) -> Self {
        GalaxyError::Other(err.to_string())
    }
}

/// Errors that can occur during galaxy operations
#[derive(Error, Debug)]
pub enum GalaxyError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("no active user (run `galaxy signup` or `galaxy login` first)")]
    NoActiveUser,

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GalaxyError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        GalaxyError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GalaxyError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        GalaxyError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GalaxyError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GalaxyError::UnknownFormat(_)
            | GalaxyError::UsageError(_)
            | GalaxyError::InvalidValue { .. }
            | GalaxyError::NoActiveUser => ExitCode::Usage,

            GalaxyError::StoreNotFound { .. }
            | GalaxyError::InvalidStore { .. }
            | GalaxyError::AlreadyExists { .. }
            | GalaxyError::NotFound { .. } => ExitCode::Data,

            GalaxyError::Io(_)
            | GalaxyError::Json(_)
            | GalaxyError::Toml(_)
            | GalaxyError::FailedOperation { .. }
            | GalaxyError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GalaxyError::UnknownFormat(_) => "unknown_format",
            GalaxyError::UsageError(_) => "usage_error",
            GalaxyError::InvalidValue { .. } => "invalid_value",
            GalaxyError::NoActiveUser => "no_active_user",
            GalaxyError::StoreNotFound { .. } => "store_not_found",
            GalaxyError::InvalidStore { .. } => "invalid_store",
            GalaxyError::AlreadyExists { .. } => "already_exists",
            GalaxyError::NotFound { .. } => "not_found",
            GalaxyError::Io(_) => "io_error",
            GalaxyError::Json(_) => "json_error",
            GalaxyError::Toml(_) => "toml_error",
            GalaxyError::FailedOperation { .. } => "failed_operation",
            GalaxyError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for galaxy operations
pub type Result<T> = std::result::Result<T, GalaxyError>;
