//! Error types for tonegen.
//!
//! Defines the error codes and types used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;
use std::path::Path;

/// Error codes for the two ways tone generation can fail.
///
/// Both surface from the output side: the file system (permissions, disk
/// space, invalid path) or a WAV header that cannot represent the
/// requested parameters. Neither is retried; both terminate the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output directory could not be created.
    /// Trigger: missing permissions or an invalid path component.
    DirCreateFailed,

    /// The WAV file could not be created, written, or finalized.
    /// Trigger: missing permissions, full disk, an invalid path, or
    /// parameters without a valid WAV encoding.
    FileWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DirCreateFailed => "DIR_CREATE_FAILED",
            ErrorCode::FileWriteFailed => "FILE_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::DirCreateFailed => "The output directory could not be created",
            ErrorCode::FileWriteFailed => "The WAV file could not be written",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::DirCreateFailed => {
                "Check that the output path is valid and its parent is writable"
            }
            ErrorCode::FileWriteFailed => {
                "Check write permissions, free disk space, and that the parameters fit the WAV format"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for tone generation.
#[derive(Debug)]
pub struct ToneError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ToneError {
    /// Creates a new ToneError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new ToneError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a DIR_CREATE_FAILED error for the given directory.
    pub fn dir_create_failed(dir: &Path, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::DirCreateFailed,
            format!("Failed to create output directory {}", dir.display()),
            source,
        )
    }

    /// Creates a FILE_WRITE_FAILED error.
    pub fn file_write_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::FileWriteFailed, reason)
    }
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )?;
        if let Some(source) = &self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using ToneError.
pub type Result<T> = std::result::Result<T, ToneError>;
