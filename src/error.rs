//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library and CLI can report. Each variant carries enough
//! context to be shown directly to the user.
//!
//! Aggregation never fails: statistics over an empty or narrowed record set
//! are empty results, not errors. Errors only come from loading the export,
//! validating user input, and writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RecordSet;
///
/// fn load() -> Result<RecordSet> {
///     Ok(RecordSet::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading the export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not have the `.txt` extension.
    ///
    /// No parse is attempted in this case.
    #[error("Invalid file format '{}': please provide a TXT file exported from WhatsApp", path.display())]
    UnsupportedExtension {
        /// The rejected path
        path: PathBuf,
    },

    /// The input bytes are not valid UTF-8.
    #[error("Could not decode {} as UTF-8: {source}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "input".to_string()))]
    Decode {
        /// The file path, if available
        path: Option<PathBuf>,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The text decoded fine but no timestamped message was found.
    #[error("No messages found{}: please provide a TXT file exported from WhatsApp", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NotAnExport {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A sender filter names someone who never posted in the export.
    #[error("Unknown sender '{name}'. Run `chatlens users` to list the participants")]
    UnknownSender {
        /// The requested sender name
        name: String,
    },

    /// Invalid date in a date window option.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An output format is unknown or its feature is disabled.
    #[error("Invalid {kind} format: {message}")]
    InvalidFormat {
        /// Which format was being chosen (`"output"`, `"report"`)
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A configuration file could not be understood.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unsupported extension error.
    pub fn unsupported_extension(path: impl Into<PathBuf>) -> Self {
        ChatlensError::UnsupportedExtension { path: path.into() }
    }

    /// Creates a decode error.
    pub fn decode(source: std::string::FromUtf8Error, path: Option<PathBuf>) -> Self {
        ChatlensError::Decode { path, source }
    }

    /// Creates a "not an export" error.
    pub fn not_an_export(path: Option<PathBuf>) -> Self {
        ChatlensError::NotAnExport { path }
    }

    /// Creates an unknown sender error.
    pub fn unknown_sender(name: impl Into<String>) -> Self {
        ChatlensError::UnknownSender { name: name.into() }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(kind: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input was rejected before parsing or produced
    /// no messages.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            ChatlensError::UnsupportedExtension { .. }
                | ChatlensError::Decode { .. }
                | ChatlensError::NotAnExport { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
