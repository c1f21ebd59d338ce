//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    /// The chat endpoint could not be reached or answered with something
    /// other than a usable reply.
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The upload endpoint rejected the file or could not be reached.
    #[error("Upload failed: {message}")]
    Upload { message: String },

    // ─────────────────────────────────────────────────────────────
    // Upload Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("File type {mime} not supported. Please upload PDF, TXT, or DOC files.")]
    UnsupportedType { mime: String },

    #[error("File {name} is too large. Maximum size is {max_mb}MB.")]
    FileTooLarge { name: String, max_mb: u64 },

    #[error("Could not read {path}: {reason}")]
    FileUnreadable { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn unsupported_type(mime: impl Into<String>) -> Self {
        Self::UnsupportedType { mime: mime.into() }
    }

    pub fn file_too_large(name: impl Into<String>, max_mb: u64) -> Self {
        Self::FileTooLarge {
            name: name.into(),
            max_mb,
        }
    }

    pub fn file_unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Errors that abort an upload batch before any request is made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType { .. } | Error::FileTooLarge { .. } | Error::FileUnreadable { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. }
                | Error::Upload { .. }
                | Error::UnsupportedType { .. }
                | Error::FileTooLarge { .. }
                | Error::FileUnreadable { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ConfigInvalid { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error under `context` and pass it through unchanged
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
