//! Output format selection.
//!
//! [`OutputFormat`] picks one of the writers in
//! [`core::output`](crate::core::output) without tying library users to
//! the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::core::models::{OutputConfig, rows_from};
//! use chatpulse::format::{OutputFormat, to_format_string};
//! use chatpulse::parser::ChatLogParser;
//!
//! let records = ChatLogParser::new().parse("1/1/24, 10:00 AM - Alice: Hello!");
//! let jsonl = to_format_string(&rows_from(&records), OutputFormat::Jsonl, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, Row};
use crate::error::ChatpulseError;

/// Output format for parsed records.
///
/// ```rust
/// use chatpulse::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array of records
    Json,

    /// JSON Lines - one record object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the cargo feature the writer for this format needs.
    pub fn feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::InvalidFormat`] for unknown extensions.
    pub fn from_path(path: &str) -> Result<Self, ChatpulseError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatpulseError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    /// Replaces the extension of `path` with this format's extension.
    ///
    /// ```rust
    /// use chatpulse::format::OutputFormat;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     OutputFormat::Json.adjust_path("out/chat_records.csv"),
    ///     PathBuf::from("out/chat_records.json")
    /// );
    /// ```
    pub fn adjust_path(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref().with_extension(self.extension())
    }

    fn missing_feature(&self) -> ChatpulseError {
        ChatpulseError::invalid_format(
            "output",
            format!(
                "Output format {self} requires the '{}' feature to be enabled",
                self.feature()
            ),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes rows to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the writer for `format` is compiled out or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    rows: &[Row<'_>],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(rows, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(rows, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(rows, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.missing_feature()),
    }
}

/// Converts rows to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    rows: &[Row<'_>],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(rows, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(rows, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(rows, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.missing_feature()),
    }
}
