//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ShellError`] - Failures reported by command handlers
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`CacheError`] - sessionStorage operations for cached listings

use thiserror::Error;

/// Failure of a single command, rendered as `<cmd>: <target>: <reason>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{cmd}: {target}: No such file or directory")]
    PathNotFound { cmd: &'static str, target: String },

    /// Operand of a listing command that does not exist.
    #[error("{cmd}: cannot access '{target}': No such file or directory")]
    CannotAccess { cmd: &'static str, target: String },

    /// A file where a directory was expected, or the reverse.
    #[error("{cmd}: {target}: {reason}")]
    TypeMismatch {
        cmd: &'static str,
        target: String,
        reason: &'static str,
    },

    /// Invalid option, missing operand or too many operands.
    #[error("{cmd}: {message}")]
    BadArguments { cmd: &'static str, message: String },

    #[error("{cmd}: {target}: Content not available")]
    ContentUnavailable { cmd: &'static str, target: String },

    #[error("{cmd}: internal error: {message}")]
    Internal { cmd: &'static str, message: String },
}

impl ShellError {
    pub fn not_found(cmd: &'static str, target: impl Into<String>) -> Self {
        Self::PathNotFound {
            cmd,
            target: target.into(),
        }
    }

    pub fn cannot_access(cmd: &'static str, target: impl Into<String>) -> Self {
        Self::CannotAccess {
            cmd,
            target: target.into(),
        }
    }

    pub fn not_a_directory(cmd: &'static str, target: impl Into<String>) -> Self {
        Self::TypeMismatch {
            cmd,
            target: target.into(),
            reason: "Not a directory",
        }
    }

    pub fn is_a_directory(cmd: &'static str, target: impl Into<String>) -> Self {
        Self::TypeMismatch {
            cmd,
            target: target.into(),
            reason: "Is a directory",
        }
    }

    pub fn bad_arguments(cmd: &'static str, message: impl Into<String>) -> Self {
        Self::BadArguments {
            cmd,
            message: message.into(),
        }
    }

    pub fn invalid_option(cmd: &'static str, option: char) -> Self {
        Self::bad_arguments(cmd, format!("invalid option -- '{}'", option))
    }

    pub fn unavailable(cmd: &'static str, target: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            cmd,
            target: target.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CommandNotFound(_) => ErrorKind::CommandNotFound,
            Self::PathNotFound { .. } | Self::CannotAccess { .. } => ErrorKind::PathNotFound,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::BadArguments { .. } => ErrorKind::BadArguments,
            Self::ContentUnavailable { .. } => ErrorKind::ContentUnavailable,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// Category of a command failure, attached to the result for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CommandNotFound,
    PathNotFound,
    TypeMismatch,
    BadArguments,
    ContentUnavailable,
    Internal,
}

impl ErrorKind {
    /// Whether the whole command result is tagged as failed.
    ///
    /// Lookup failures are reported inline, the way a shell prints them
    /// between regular output lines.
    pub fn tags_result(self) -> bool {
        matches!(
            self,
            Self::CommandNotFound | Self::BadArguments | Self::Internal
        )
    }
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx status
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// sessionStorage errors for the repository cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry: {0}")]
    Serialize(String),
    #[error("failed to write to sessionStorage")]
    WriteFailed,
}
