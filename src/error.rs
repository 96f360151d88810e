//! Error and diagnostic types for chatpulse.
//!
//! Two kinds of problems exist:
//!
//! - [`ChatpulseError`] is returned from operations that cannot continue:
//!   reading an export from disk, writing output, or a bad filter date.
//! - [`ParseWarning`] is a non-fatal diagnostic raised while parsing. The
//!   parser never fails on malformed text; it degrades individual records
//!   and reports what happened through these warnings instead.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all fallible chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export is larger than the configured input limit.
    #[error("Input too large{}: {actual_size} bytes (maximum: {max_size} bytes)", path.as_ref().map(|p| format!(" ({})", p.display())).unwrap_or_default())]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: u64,
        /// Actual size encountered
        actual_size: u64,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An output format or path that cannot be handled.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being interpreted (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Statistics were requested for a user that never appears in the data.
    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when an in-memory output buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatpulseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatpulseError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatpulseError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an input-too-large error.
    pub fn input_too_large(max_size: u64, actual_size: u64, path: Option<PathBuf>) -> Self {
        ChatpulseError::InputTooLarge {
            max_size,
            actual_size,
            path,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatpulseError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatpulseError::InvalidDate { .. })
    }

    /// Returns `true` if the input exceeded the size limit.
    pub fn is_input_too_large(&self) -> bool {
        matches!(self, ChatpulseError::InputTooLarge { .. })
    }
}

/// A non-fatal problem found while parsing an export.
///
/// Warnings never stop parsing. They are collected into a
/// [`ParseReport`](crate::parser::ParseReport) and, unless disabled, logged
/// through `tracing` at `WARN` level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// The input contained no timestamp tokens at all.
    #[error("no timestamps found; the input does not look like a chat export")]
    NoTimestampsFound,

    /// A token matched the timestamp pattern but is not a valid date.
    #[error("could not parse timestamp '{token}' of message #{index}")]
    TimestampParseFailure {
        /// Zero-based position of the affected record
        index: usize,
        /// The raw token text
        token: String,
    },

    /// The number of assembled records differs from the number of tokens.
    #[error("found {timestamps} timestamps but assembled {records} records")]
    RecordCountMismatch {
        /// Number of timestamp tokens
        timestamps: usize,
        /// Number of records assembled
        records: usize,
    },
}

impl ParseWarning {
    /// Returns `true` if the warning affects a single record only.
    pub fn is_per_record(&self) -> bool {
        matches!(self, ParseWarning::TimestampParseFailure { .. })
    }
}
