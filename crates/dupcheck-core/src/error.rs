//! Error types and exit codes for dupcheck
//!
//! Exit codes:
//! - 0: Success (duplicates found or not)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing title or description)
//! - 3: Data/store error (corpus or user directory unavailable)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Message returned to callers when the query text is incomplete
pub const MISSING_INPUT_MESSAGE: &str = "Title and description are required";

/// Message returned to callers for any server-side failure
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Exit codes for the dupcheck binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or incomplete request (2)
    Usage = 2,
    /// Data/store error - collaborator unavailable (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for DupcheckError {
    fn from(err: rusqlite::Error) -> Self {
        DupcheckError::Other(err.to_string())
    }
}

/// Errors that can occur during a duplicate check
#[derive(Error, Debug)]
pub enum DupcheckError {
    // Usage errors (exit code 2)
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found: {path:?}")]
    StoreNotFound { path: PathBuf },

    #[error("failed to load project corpus: {reason}")]
    CorpusUnavailable { reason: String },

    #[error("failed to look up students: {reason}")]
    DirectoryUnavailable { reason: String },

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

impl DupcheckError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        DupcheckError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DupcheckError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap a failure raised while fetching the project corpus
    pub fn corpus(error: impl std::fmt::Display) -> Self {
        DupcheckError::CorpusUnavailable {
            reason: error.to_string(),
        }
    }

    /// Wrap a failure raised while fetching student identities
    pub fn directory(error: impl std::fmt::Display) -> Self {
        DupcheckError::DirectoryUnavailable {
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DupcheckError::MissingInput
            | DupcheckError::UnknownFormat(_)
            | DupcheckError::UsageError(_)
            | DupcheckError::InvalidValue { .. } => ExitCode::Usage,

            DupcheckError::StoreNotFound { .. }
            | DupcheckError::CorpusUnavailable { .. }
            | DupcheckError::DirectoryUnavailable { .. } => ExitCode::Data,

            DupcheckError::Io(_)
            | DupcheckError::Json(_)
            | DupcheckError::Toml(_)
            | DupcheckError::FailedOperation { .. }
            | DupcheckError::Other(_) => ExitCode::Failure,
        }
    }

    /// Whether the caller sent a bad request, as opposed to a server-side failure
    pub fn is_client_error(&self) -> bool {
        self.exit_code() == ExitCode::Usage
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DupcheckError::MissingInput => "missing_input",
            DupcheckError::UnknownFormat(_) => "unknown_format",
            DupcheckError::UsageError(_) => "usage_error",
            DupcheckError::InvalidValue { .. } => "invalid_value",
            DupcheckError::StoreNotFound { .. } => "store_not_found",
            DupcheckError::CorpusUnavailable { .. } => "corpus_unavailable",
            DupcheckError::DirectoryUnavailable { .. } => "directory_unavailable",
            DupcheckError::Io(_) => "io_error",
            DupcheckError::Json(_) => "json_error",
            DupcheckError::Toml(_) => "toml_error",
            DupcheckError::FailedOperation { .. } => "failed_operation",
            DupcheckError::Other(_) => "other",
        }
    }

    /// Convert error to the response payload seen by callers.
    ///
    /// Client errors carry their message; server-side failures collapse to a
    /// generic message, with the detail kept under `detail` for diagnostics.
    pub fn to_json(&self) -> serde_json::Value {
        if self.is_client_error() {
            serde_json::json!({
                "error": self.to_string(),
                "type": self.error_type(),
                "code": self.exit_code() as i32,
            })
        } else {
            serde_json::json!({
                "error": SERVER_ERROR_MESSAGE,
                "type": self.error_type(),
                "code": self.exit_code() as i32,
                "detail": self.to_string(),
            })
        }
    }
}

/// Result type alias for dupcheck operations
pub type Result<T> = std::result::Result<T, DupcheckError>;
